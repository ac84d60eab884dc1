// Scan a policy number file and write one result line per entry
use std::env;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <input-file> <output-file>", args[0]);
        process::exit(2);
    }

    match policy_ocr::scan::scan_file(Path::new(&args[1]), Path::new(&args[2])) {
        Ok(()) => println!("OK: {} -> {}", args[1], args[2]),
        Err(err) => {
            eprintln!("FAIL: {err}");
            process::exit(1);
        }
    }
}
