use cfg_aliases::cfg_aliases;

fn main() {
    // Setup cfg aliases
    cfg_aliases! {
        // Platforms
        web_platform: {
            all(target_family = "wasm", any(target_os = "unknown", target_os = "none"))
        },
    }
}
