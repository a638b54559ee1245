use {
    base::*,
    mimic::{MimicConfig, MimicGenerator},
    std::io::Write,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_stdout_logger();

    // get parameters
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        log_fatal!("Usage: {} <rttm-file> [count] [--json]", args[0]);
    }
    let rttm_path = &args[1];
    let mut count = 10usize;
    let mut json = false;
    for arg in &args[2..] {
        if arg == "--json" {
            json = true;
        } else {
            count = match arg.parse() {
                Ok(count) => count,
                Err(_) => {
                    log_fatal!("Invalid sample count: {}", arg);
                }
            };
        }
    }

    let mut generator = MimicGenerator::open(rttm_path, MimicConfig::default())?;
    log::info!(
        "generating {} samples of {}s from {}",
        count,
        generator.config().length,
        rttm_path
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for index in 0..count {
        let mut sample = generator.generate()?;
        sample.uri = Some(format!("sample-{}", index));
        if json {
            serde_json::to_writer(&mut out, &sample)?;
            writeln!(out)?;
        } else {
            rttm::write_rttm(&mut out, &sample)?;
        }
    }

    Ok(())
}
