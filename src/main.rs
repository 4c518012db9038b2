use anyhow::Context;
use carrier_ip::{Classifier, ClassifierConfig};

const SAMPLE_ADDRESSES: &[&str] = &[
    "203.226.1.1",
    "27.165.0.1",
    "27.184.0.1",
    "175.223.10.20",
    "106.101.3.4",
    "2001:2D8:ABCD::1",
    "2001:e60::1",
    "8.8.8.8",
    "255.255.255.255",
    "not-an-ip",
];

fn main() -> anyhow::Result<()> {
    // Console only unless CARRIER_IP_LOG_DIR asks for a log file
    let log_dir = carrier_ip::config::paths::log_dir();
    let _guard = carrier_ip::logging::init_logging(log_dir, tracing::Level::WARN);

    let config = ClassifierConfig::load().context("loading carrier table config")?;
    let classifier = Classifier::from_config(&config).context("building classifier")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let addresses: Vec<&str> = if args.is_empty() {
        SAMPLE_ADDRESSES.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    for ip in addresses {
        let line = serde_json::json!({
            "ip": ip,
            "isMobile": classifier.is_mobile_carrier_ip(ip),
            "info": classifier.carrier_info(ip),
        });
        println!("{line}");
    }

    Ok(())
}
