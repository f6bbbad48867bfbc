#![no_main]

use colorvalue::*;

const DEBUG: bool = false;

fn fuzz(data: &str) {
    let color = match Color::parse(data) {
        Ok(color) => color,
        Err(..) => return,
    };
    let serialization = color.render(true);
    if DEBUG {
        println!("IN: {:?}", data);
        println!("OUT: {:?}", serialization);
    }
    let reparsed = Color::parse(&serialization).expect("serialization should parse");
    match color {
        Color::Hex(..) => assert_eq!(color, reparsed),
        // rgb() has no alpha notation, so only the channels come back.
        Color::Rgb(rgb) => {
            let channels = reparsed.to_rgb();
            assert_eq!(
                (rgb.red(), rgb.green(), rgb.blue()),
                (channels.red(), channels.green(), channels.blue())
            );
        }
    }

    let hex = color.to_hex();
    assert_eq!(hex.to_rgb().to_hex().to_bytes(), hex.to_bytes());
}

libfuzzer_sys::fuzz_target!(|data: &str| {
    fuzz(data);
});
