#![cfg(feature = "rpi")]

use anyhow::Result;
use librc522::config::BusConfig;
use librc522::device::ReaderBuilder;
use librc522::transport::RppalTransport;
use serial_test::serial;

// These tests require an RC522 wired to SPI0/CE0 with RST on BCM 25. They
// are marked `#[ignore]` so CI does not attempt to run them. Run manually
// with:
//
// cargo test -p librc522 --test hardware --features rpi -- --ignored
//

const RESET_PIN: u8 = 25;

#[test]
#[ignore]
#[serial]
fn bring_up_real_reader() -> Result<()> {
    let transport = RppalTransport::with_reset_pin(RESET_PIN, &BusConfig::default())?;
    let reader = ReaderBuilder::new()
        .with_transport(Box::new(transport))
        .build_uninitialized()?
        .initialize()?;
    println!(
        "version {} ({})",
        reader.version(),
        reader.version().describe()
    );
    reader.shutdown()?;
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn sense_field_once() -> Result<()> {
    let transport = RppalTransport::with_reset_pin(RESET_PIN, &BusConfig::default())?;
    let mut reader = ReaderBuilder::new()
        .with_transport(Box::new(transport))
        .build_uninitialized()?
        .initialize()?;
    if reader.detect_presence()? {
        match reader.acquire_uid() {
            Ok((uid, _)) => println!("card {}", uid),
            Err(e) => println!("card present, read failed: {}", e),
        }
    } else {
        println!("no card in field");
    }
    reader.shutdown()?;
    Ok(())
}
