use toruslife::pattern::presets;
use toruslife::sim::Simulation;

fn main() -> anyhow::Result<()> {
    let mut sim = Simulation::from_pattern(presets::block_pair());
    sim.initialize();

    for generation in 0..=4 {
        println!("generation {generation}");
        println!("{}", sim.grid()?);

        sim.update()?;
    }

    Ok(())
}
