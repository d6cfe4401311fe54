use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Cargar variables de entorno desde .env si existe (EmailJS, cooldown, etc.)
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                // Ignorar comentarios y líneas vacías
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // Parsear KEY=VALUE (con o sin comillas)
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Solo configurar si no está ya definida en el entorno
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default values. Copy .env.example to .env to configure EmailJS.");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    for key in [
        "EMAILJS_SERVICE_ID",
        "EMAILJS_ENDPOINT",
        "EMAILJS_TEMPLATE_ID",
        "EMAILJS_PUBLIC_KEY",
        "COOLDOWN_MINUTES",
        "LOADING_TICK_MS",
        "LOADING_MAX_INCREMENT",
        "LOADING_DISMISS_DELAY_MS",
        "PROJECTS_PAGE_SIZE",
        "LOG_LEVEL",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
