fn main() {
    if let Err(err) = nodewar_stats::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
