use toruslife::cell::Cell;
use toruslife::pattern::Pattern;
use toruslife::pattern::presets;
use toruslife::sim::Config;
use toruslife::sim::Simulation;

fn from_plaintext(text: &str) -> anyhow::Result<Simulation> {
    let pattern: Pattern = text.parse()?;

    Ok(Simulation::from_pattern(pattern))
}

#[test]
fn initialization_is_reproducible() -> anyhow::Result<()> {
    let mut a = Simulation::random(8, 13, 0.35, 99)?;
    let mut b = Simulation::random(8, 13, 0.35, 99)?;

    a.initialize();
    b.initialize();

    assert_eq!(a.grid()?, b.grid()?);

    Ok(())
}

#[test]
fn reinitialization_resets_to_generation_zero() -> anyhow::Result<()> {
    let mut sim = Simulation::random(10, 10, 0.3, 7)?;

    sim.initialize();
    let first = sim.grid()?.clone();

    sim.update()?;
    sim.update()?;
    sim.update()?;
    assert_eq!(sim.generation(), 3);

    sim.initialize();

    assert_eq!(sim.generation(), 0);
    assert_eq!(sim.grid()?, &first);

    Ok(())
}

#[test]
fn lone_cell_dies_of_isolation() -> anyhow::Result<()> {
    let mut sim = from_plaintext(
        "\
.....
.....
..O..
.....
.....
",
    )?;

    sim.initialize();
    sim.update()?;

    assert_eq!(sim.grid()?.count_alive(), 0);

    Ok(())
}

#[test]
fn pair_of_cells_dies_of_isolation() -> anyhow::Result<()> {
    // Each cell has exactly one alive neighbor
    let mut sim = from_plaintext(
        "\
.....
.....
.OO..
.....
.....
",
    )?;

    sim.initialize();
    sim.update()?;

    assert_eq!(sim.grid()?.count_alive(), 0);

    Ok(())
}

#[test]
fn blinker_survives_with_two_neighbors_and_births_with_three() -> anyhow::Result<()> {
    let mut sim = Simulation::from_pattern(presets::blinker());

    sim.initialize();
    sim.update()?;

    let grid = sim.grid()?;

    // The center survived with 2 neighbors, the bar ends died with 1, and
    // the cells left and right of the center were born with exactly 3
    assert_eq!(grid.get(2, 2), Cell::Alive);
    assert_eq!(grid.get(1, 2), Cell::Dead);
    assert_eq!(grid.get(3, 2), Cell::Dead);
    assert_eq!(grid.get(2, 1), Cell::Alive);
    assert_eq!(grid.get(2, 3), Cell::Alive);

    insta::assert_snapshot!(grid.to_string(), @r"
.....
.....
.OOO.
.....
.....
");

    Ok(())
}

#[test]
fn crowded_cell_dies() -> anyhow::Result<()> {
    // The center of the plus has 4 alive neighbors
    let mut sim = from_plaintext(
        "\
.....
..O..
.OOO.
..O..
.....
",
    )?;

    sim.initialize();
    sim.update()?;

    assert_eq!(sim.grid()?.get(2, 2), Cell::Dead);

    Ok(())
}

#[test]
fn dead_cell_with_two_neighbors_stays_dead() -> anyhow::Result<()> {
    let mut sim = from_plaintext(
        "\
.....
.O.O.
.....
.....
.....
",
    )?;

    sim.initialize();
    sim.update()?;

    // (1, 2) had exactly 2 alive neighbors; nothing is born anywhere
    assert_eq!(sim.grid()?.count_alive(), 0);

    Ok(())
}

#[test]
fn l_triomino_closes_into_a_block() -> anyhow::Result<()> {
    let mut sim = from_plaintext(
        "\
.....
.OO..
.O...
.....
.....
",
    )?;

    sim.initialize();
    sim.update()?;

    // (2, 2) is born with exactly 3 neighbors, the rest survive
    let grid = sim.grid()?;
    assert_eq!(grid.get(2, 2), Cell::Alive);
    assert_eq!(grid.count_alive(), 4);

    Ok(())
}

#[test]
fn block_is_a_still_life() -> anyhow::Result<()> {
    let mut sim = Simulation::from_pattern(presets::block());

    sim.initialize();
    let before = sim.grid()?.clone();

    sim.update()?;

    assert_eq!(sim.grid()?, &before);

    Ok(())
}

#[test]
fn block_pair_oscillates_with_period_two() -> anyhow::Result<()> {
    let mut sim = from_plaintext(
        "\
......
.OO...
.OO...
...OO.
...OO.
......
",
    )?;

    sim.initialize();
    let start = sim.grid()?.clone();

    sim.update()?;
    assert_ne!(sim.grid()?, &start);

    sim.update()?;
    assert_eq!(sim.grid()?, &start);

    Ok(())
}

#[test]
fn block_pair_preset_matches_the_literal() -> anyhow::Result<()> {
    let mut sim = Simulation::from_pattern(presets::block_pair());
    sim.initialize();

    insta::assert_snapshot!(sim.grid()?.to_string(), @r"
......
.OO...
.OO...
...OO.
...OO.
......
");

    Ok(())
}

#[test]
fn pattern_shape_wins_over_explicit_dimensions() -> anyhow::Result<()> {
    let mut sim = Simulation::new(Config {
        grid_height: 40,
        grid_width: 30,
        init_pattern: Some(presets::blinker()),
        ..Config::default()
    })?;

    assert_eq!(sim.height(), 5);
    assert_eq!(sim.width(), 5);

    sim.initialize();
    assert_eq!(sim.grid()?.height(), 5);
    assert_eq!(sim.grid()?.width(), 5);

    Ok(())
}

#[test]
fn update_counts_generations() -> anyhow::Result<()> {
    let mut sim = Simulation::random(6, 6, 0.5, 3)?;

    sim.initialize();
    assert_eq!(sim.generation(), 0);

    for expected in 1..=5 {
        sim.update()?;
        assert_eq!(sim.generation(), expected);
    }

    Ok(())
}
