//! stockledger - Track purchases, sales and inventory of a small shop.

fn main() -> std::process::ExitCode {
    stockledger::cmd::dispatch::main()
}
