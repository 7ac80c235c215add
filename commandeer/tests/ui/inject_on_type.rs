use commandeer::Injectable;

#[derive(Injectable)]
#[inject("type.level")]
struct OnType {
    #[inject]
    level: u8,
}

fn main() {
    let _ = OnType { level: 0 }.level;
}
