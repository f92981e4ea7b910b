use std::env;
use std::fs;
use std::path::Path;

/// Used when `fixtures/portfolio.json` is missing so the site still builds.
const FALLBACK_CONTENT: &str = r#"{
  "owner": "Portfolio",
  "typewriter": ["Problem Solver"],
  "sections": [
    { "id": "home", "label": "Home" },
    { "id": "skills", "label": "Skills" },
    { "id": "projects", "label": "Projects" },
    { "id": "contact", "label": "Contact" }
  ],
  "filters": [{ "key": "all", "label": "All" }],
  "projects": []
}
"#;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("portfolio.json");

    // Copy the page content to OUT_DIR for include_str
    let src = Path::new("../fixtures/portfolio.json");
    if src.exists() {
        fs::copy(src, &dest).unwrap();
    } else {
        fs::write(&dest, FALLBACK_CONTENT).unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/portfolio.json");
}
