fn main() {
    if let Err(err) = ramify::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
