use route_core::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let g = dataset::joao_pessoa()?;

    let origin = std::env::args().nth(1).unwrap_or_else(|| "Tambaú".into());
    let destination = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "Mangabeira".into());

    match search::shortest_path(&g, &origin, &destination)? {
        SearchResult::Found(sp) => {
            println!("Path: {}", sp.names(&g).join(" -> "));
            println!("Costs: {} minutes", sp.weight);
        }
        SearchResult::Unreachable => println!("No path between {} and {}", origin, destination),
    }
    Ok(())
}
