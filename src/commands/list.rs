use crate::templates;

pub fn run() {
    println!("Available project types:");
    println!();

    for (label, body) in templates::TEMPLATES {
        let title = body.lines().next().unwrap_or("").trim_start_matches("name: ");
        println!("  {label:<24} {title}");
    }
}
