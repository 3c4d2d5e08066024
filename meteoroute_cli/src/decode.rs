use meteoroute::polyline;

pub fn run(encoded: &str) -> Result<(), anyhow::Error> {
    for coordinate in polyline::decode(encoded)? {
        println!("{coordinate}");
    }

    Ok(())
}
