//! `dt2mnfs` command line entry point.

fn main() {
    dt2mnfs::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    std::process::exit(dt2mnfs::run(&args));
}
