use octet_bits::{Octet, OctetIndex, Quartet, QuartetIndex, QuartetPosition, quartets_from_byte};

fn main() {
    println!("=== Octet Bits Examples ===\n");

    // Example 1: Status register flags
    example_status_register();

    // Example 2: Packing two 4-bit fields into one byte
    let _ = example_packed_fields();

    // Example 3: Viewing a buffer as octets
    example_buffer_view();
}

fn example_status_register() {
    println!("Example 1: Status register flags");

    const READY: OctetIndex = OctetIndex::Bit0;
    const ERROR: OctetIndex = OctetIndex::Bit3;
    const BUSY: OctetIndex = OctetIndex::Bit7;

    let mut status = Octet::default();
    status.set(READY).set(BUSY);
    println!("  Register: 0b{}", status);

    status.toggle(BUSY).set(ERROR);
    println!("  Register: 0b{} (0x{})", status, status.hex_string());

    let map = status.octet_map();
    println!("  Ready: {}, Error: {}, Busy: {}", map.b0, map.b3, map.b7);

    print!("  Set bits:");
    for idx in status.iter_set() {
        print!(" {}", u8::from(idx));
    }
    println!("\n");
}

fn example_packed_fields() -> Result<(), octet_bits::BitsError> {
    println!("Example 2: Version (hi nibble) + header length (lo nibble)");

    let version = Quartet::new(4)?;
    let ihl = Quartet::new(5)?;
    let mut header = Octet::from_quartets(version, ihl);
    println!("  Header byte: 0x{:02X} = 0b{}", header.byte(), header);

    header.overwrite_quartet(Quartet::new(6)?, QuartetPosition::Hi);
    let (version, ihl) = header.quartets();
    println!("  After bump: version {}, ihl {}", version.bits(), ihl.bits());

    let (hi, lo) = quartets_from_byte(header.byte());
    println!(
        "  Nibbles: hi {} (bit3 {}), lo {} (bit0 {})",
        hi,
        hi.is_set(QuartetIndex::Bit3),
        lo,
        lo.is_set(QuartetIndex::Bit0)
    );
    println!();

    Ok(())
}

fn example_buffer_view() {
    println!("Example 3: In-place edits on a byte buffer");

    let mut buf = [0x00u8, 0xF0, 0x0F];
    for octet in Octet::cast_slice_mut(&mut buf) {
        octet.toggle(OctetIndex::Bit0);
    }
    println!("  Buffer: {:02X?}", buf);
}
