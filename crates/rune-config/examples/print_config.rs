/// Example program to print the loaded configuration
///
/// Run with: cargo run -p rune-config --example print_config

fn main() {
    let config = rune_config::RuneConfig::load();

    println!("=== Rune Text View Configuration ===\n");

    println!("Layout Settings:");
    println!("  Page Width: {}", config.layout.page_width);
    println!("  Line Height: {}", config.layout.line_height);
    println!("  Advance: {}", config.layout.advance);
    println!();

    println!("Text Settings:");
    println!("  Font: {:?}", config.text.font);
    println!("  Font Size: {:?}", config.text.font_size);
    println!("  Line Padding: {:?}", config.text.line_padding);
    println!();

    println!("Selection Settings:");
    println!("  Selectable: {}", config.selection.selectable);
    println!("  Empty Line Width: {}", config.selection.empty_line_width);
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
