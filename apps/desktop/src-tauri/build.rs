fn main() {
    // Generates the Tauri context (config, capabilities, icons) for the window build
    #[cfg(feature = "desktop")]
    tauri_build::build();
}
