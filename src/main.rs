use std::io;

fn main() -> io::Result<()> {
    dsodis::cli::main()
}
