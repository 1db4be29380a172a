use toruslife::sim::Simulation;

fn main() -> anyhow::Result<()> {
    let mut sim = Simulation::random(16, 32, 0.3, 42)?;
    sim.initialize();

    println!("generation 0");
    println!("{}", sim.grid()?);

    for _ in 0..8 {
        sim.update()?;
    }

    println!("generation 8, {} alive", sim.grid()?.count_alive());
    println!("{}", sim.grid()?);

    Ok(())
}
