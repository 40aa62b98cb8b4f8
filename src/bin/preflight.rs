use medlease_payments::domain::booking::{compute_total, duration_label};
use medlease_payments::{PaymentReference, PaymentService, ServiceConfig};
use rust_decimal_macros::dec;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Reads (all optional):\n\
           BIND_ADDR, PAYMENT_REFERENCE_PREFIX, MIN_PAYMENT_AMOUNT\n"
    );
    std::process::exit(2);
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let config = ServiceConfig::from_env()?;

    println!("> Preflight:");
    println!("  BIND_ADDR={}", config.bind_addr);
    println!("  PAYMENT_REFERENCE_PREFIX={}", config.reference_prefix);
    println!("  MIN_PAYMENT_AMOUNT={}", config.minimum_amount);

    let service = PaymentService::new(&config);

    // Formatter must read back its own output.
    let sample = dec!(1234567.89);
    let formatted = service.format_amount(sample);
    let (parsed, ok) = service.parse_amount(&formatted);
    if !ok || parsed != sample {
        anyhow::bail!("currency round trip failed: {} -> {} -> {}", sample, formatted, parsed);
    }
    println!("  Currency round trip: {} (ok)", formatted);

    let reference = service.generator().generate();
    reference
        .as_str()
        .parse::<PaymentReference>()
        .map_err(|e| anyhow::anyhow!("generated reference is malformed: {}", e))?;
    println!("  Sample payment reference: {} (ok)", reference);

    let minimum = service.validator().minimum();
    println!(
        "  Minimum payable: {} (rejects {})",
        service.format_amount(minimum),
        service.format_amount(minimum - dec!(0.01))
    );

    let total = compute_total(dec!(500), 3);
    println!(
        "  Sample quote: {}/hour x {} = {}",
        service.format_amount(dec!(500)),
        duration_label(3),
        service.format_amount(total)
    );

    println!("> Preflight OK.");
    Ok(())
}
