// Zyntalic command-line translator.
//
// Usage: zyntalic [OPTIONS] <TEXT>
//
// Prints one block per translated sentence, or raw JSON records with
// --json. All options have deterministic defaults; the same invocation
// always prints the same output.

use zyntalic_translate::{PipelineConfig, Translator};

struct CliArgs {
    text: String,
    mirror_rate: f64,
    engine: String,
    json: bool,
}

fn main() {
    env_logger::init();

    let config = PipelineConfig::default();
    let args = match parse_args(config.default_mirror_rate) {
        Some(args) => args,
        None => {
            print_usage();
            std::process::exit(2);
        }
    };

    let translator = Translator::new(config);
    match translator.translate_text(&args.text, args.mirror_rate, &args.engine) {
        Ok(records) => {
            if args.json {
                match serde_json::to_string_pretty(&records) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Failed to serialize records: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                for (i, record) in records.iter().enumerate() {
                    println!("Sentence {}:", i + 1);
                    println!("  [Source]: {}", record.source);
                    println!("  [Target]: {}", record.target);
                    println!("  [Lemma]:  {}", record.lemma);
                    println!("  [Engine]: {}", record.engine);
                    if !record.anchors.is_empty() {
                        let anchors: Vec<&str> =
                            record.anchors.iter().map(|(id, _)| id.as_str()).collect();
                        println!("  [Anchors]: {}", anchors.join(", "));
                    }
                    println!();
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}

fn parse_args(default_mirror_rate: f64) -> Option<CliArgs> {
    let mut args = std::env::args().skip(1);
    let mut text: Option<String> = None;
    let mut mirror_rate = default_mirror_rate;
    let mut engine = "core".to_string();
    let mut json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mirror-rate" => {
                let Some(value) = args.next().and_then(|v| v.parse().ok()) else {
                    eprintln!("--mirror-rate requires a number in [0, 1]");
                    return None;
                };
                mirror_rate = value;
            }
            "--engine" => {
                let Some(value) = args.next() else {
                    eprintln!("--engine requires a value");
                    return None;
                };
                engine = value;
            }
            "--json" => json = true,
            "--help" | "-h" => return None,
            other if other.starts_with("--") => {
                eprintln!("Unknown argument: {other}");
                return None;
            }
            other => {
                if let Some(t) = text.as_mut() {
                    t.push(' ');
                    t.push_str(other);
                } else {
                    text = Some(other.to_string());
                }
            }
        }
    }

    text.map(|text| CliArgs {
        text,
        mirror_rate,
        engine,
        json,
    })
}

fn print_usage() {
    println!("Usage: zyntalic [OPTIONS] <TEXT>");
    println!();
    println!("Options:");
    println!("  --mirror-rate <RATE>   Source-scaffolding retention in [0, 1] (default: 0.8)");
    println!("  --engine <ENGINE>      core | chiasmus | transformer (default: core)");
    println!("  --json                 Emit records as JSON");
    println!("  -h, --help             Show this help");
}
