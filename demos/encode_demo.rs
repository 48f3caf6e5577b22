use shortuuid::{PredefinedAlphabet, ShortUuid};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

fn main() {
    // RUST_LOG=shortuuid=debug shows alphabet construction
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let id = Uuid::new_v4();
    println!("uuid: {id}");

    for p in PredefinedAlphabet::ALL {
        let codec = ShortUuid::predefined(p);
        match codec.encode(id) {
            Ok(short) => println!("{:>16}: {short}", p.name()),
            Err(e) => eprintln!("{:>16}: {e}", p.name()),
        }
    }

    match shortuuid::decode("not-a-short-id") {
        Ok(s) => println!("unexpected: {s}"),
        Err(e) => println!("rejected: {e}"),
    }
}
