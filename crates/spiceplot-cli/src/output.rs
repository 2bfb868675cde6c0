//! Run report printing.

use spiceplot::RunReport;

/// Print the saved figures, as text or as JSON.
pub fn print_report(report: &RunReport, json: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Error serializing report: {}", e),
        }
    } else if !report.figures.is_empty() {
        println!();
        println!("Saved figures:");
        print!("{}", report.to_text());
    }
}
