//! Educational features: explanations of what each command does.

use colored::Colorize;

/// Command explanation builder.
pub struct Explain {
    description: String,
    api_call: Option<String>,
    network: Option<String>,
    what_happens: Vec<String>,
}

impl Explain {
    fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            api_call: None,
            network: None,
            what_happens: Vec::new(),
        }
    }

    fn api(mut self, endpoint: &str) -> Self {
        self.api_call = Some(endpoint.to_string());
        self
    }

    fn network(mut self, note: &str) -> Self {
        self.network = Some(note.to_string());
        self
    }

    fn step(mut self, step: &str) -> Self {
        self.what_happens.push(step.to_string());
        self
    }

    /// Print the explanation to stdout.
    pub fn print(&self) {
        println!();
        println!("{}", "=== What This Does ===".bold().cyan());
        println!("{}", self.description);
        println!();

        if !self.what_happens.is_empty() {
            println!("{}", "How it works:".bold());
            for (i, step) in self.what_happens.iter().enumerate() {
                println!("  {}. {}", i + 1, step);
            }
            println!();
        }

        if let Some(api) = &self.api_call {
            println!("{} {}", "API Call:".bold(), api.dimmed());
        }

        if let Some(note) = &self.network {
            println!("{} {}", "Network:".bold(), note);
        }

        println!();
        println!("{}", "=== Results ===".bold().cyan());
        println!();
    }

    // ========================================================================
    // Factory methods for each command
    // ========================================================================

    pub fn detect(path: &str) -> Self {
        Self::new(&format!("Checks {path} for signs of tampering or manipulation."))
            .api("POST /predict (multipart field \"file\")")
            .network("one upload, 60 second timeout")
            .step("Checks the file is JPEG, PNG or WebP and at most 10MB")
            .step("Uploads the image to the inference service")
            .step("The model classifies it as Authentic or Tampered")
            .step("Shows the confidence, class probabilities and raw scores")
    }

    pub fn validate(path: &str) -> Self {
        Self::new(&format!("Checks whether {path} would be accepted for detection."))
            .network("none - nothing leaves this machine")
            .step("Reads the file's size and declared media type")
            .step("Accepts image/jpeg, image/jpg, image/png and image/webp up to 10MB")
    }

    pub fn health(watch: bool) -> Self {
        let explanation = Self::new("Asks the inference service whether it is up and its model is loaded.")
            .api("GET /health")
            .step("Ready: service reachable and model loaded")
            .step("Model Not Loaded: service reachable, model missing")
            .step("Offline: no usable answer");

        if watch {
            explanation
                .network("one request immediately, then one per interval")
                .step("Prints each change until you press Ctrl-C")
        } else {
            explanation.network("one request")
        }
    }

    pub fn info() -> Self {
        Self::new("Shows what the inference service reports about itself.")
            .api("GET /")
            .step("Model description, device and version, when available")
    }

    pub fn load_model(path: Option<&str>) -> Self {
        let target = path.map_or_else(
            || "its default weights file".to_string(),
            |p| format!("the weights at {p}"),
        );
        Self::new(&format!("Asks the inference service to load {target}."))
            .api("POST /load-model")
            .step("Replaces whatever model the service currently has loaded")
    }
}
