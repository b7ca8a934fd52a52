use crate::core::config::data::{path_display, Config};

impl Config {
    pub fn print_all(&self) {
        println!("Current configuration:");
        if let Ok(path) = Config::get_config_path() {
            println!("  file: {}", path_display(path));
        }
        print_entry("model", self.model.as_deref(), self.model());
        print_entry("base-url", self.base_url.as_deref(), self.base_url());

        let params = self.generation_params();
        print_entry(
            "temperature",
            self.temperature.map(|v| v.to_string()).as_deref(),
            &params.temperature.to_string(),
        );
        print_entry(
            "max-output-tokens",
            self.max_output_tokens.map(|v| v.to_string()).as_deref(),
            &params.max_output_tokens.to_string(),
        );
        print_entry(
            "top-p",
            self.top_p.map(|v| v.to_string()).as_deref(),
            &params.top_p.to_string(),
        );
        print_entry(
            "top-k",
            self.top_k.map(|v| v.to_string()).as_deref(),
            &params.top_k.to_string(),
        );
        match self.max_context_messages {
            Some(limit) => println!("  max-context-messages: {limit}"),
            None => println!("  max-context-messages: (unset, whole conversation)"),
        }
    }
}

fn print_entry(key: &str, configured: Option<&str>, effective: &str) {
    match configured {
        Some(value) => println!("  {key}: {value}"),
        None => println!("  {key}: {effective} (default)"),
    }
}
