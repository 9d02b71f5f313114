use colored::Colorize;

pub fn print_help() {
    println!("\n{}", "🍃 AuraNutri Commands:".bold());
    println!("  log                 - Open the logging overlay");
    println!("  log <meal>          - Describe a meal and analyze it right away");
    println!("  photo <image_path>  - Analyze a photo of your meal");
    println!("                        (PNG, JPEG, GIF, WebP, BMP, TIFF, ICO, AVIF; convert HEIC first)");
    println!("  mood <name>         - Choose how you feel (default: balanced)");
    println!("  moods               - List the available moods");
    println!("  cancel              - Close the logging overlay");
    println!();

    println!("{}", "📖 Journal Commands:".bold());
    println!("  journal             - Show today's reflections, newest first");
    println!("  summary             - Show daily totals and the macro ring");
    println!("  profile             - Show your profile");
    println!("  delete <id>         - Remove an entry");
    println!();

    println!("{}", "⚙️ System Commands:".bold());
    println!("  help                - Show this help menu");
    println!("  exit                - Exit the program");
    println!();

    println!(
        "{}",
        "While the overlay is open, just type what you ate and press enter.".bright_black()
    );
}

pub fn print_goodbye() {
    println!("👋 Goodbye! Nourish yourself kindly.");
}
