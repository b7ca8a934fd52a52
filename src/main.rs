fn main() -> Result<(), Box<dyn std::error::Error>> {
    flashchat::cli::main()
}
