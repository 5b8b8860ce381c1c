mod color;

pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_round_trip() {
        for c in [Rgb::new(0.3, 0.02, 0.9), Rgb::from_bytes(0xff, 0x73, 0x00)] {
            let back = Rgb::from_linear(c.to_linear());
            assert!((back.r - c.r).abs() < 1e-5);
            assert!((back.g - c.g).abs() < 1e-5);
            assert!((back.b - c.b).abs() < 1e-5);
        }
        assert!((Rgb::from_linear(Rgb::new(0.5, 0.0, 1.0)).r - 0.735_357).abs() < 1e-4);
    }

    #[test]
    fn rgb_from_hex() {
        let c = Rgb::from_hex("#ff8800").unwrap();
        assert_eq!(c, Rgb::from_bytes(255, 136, 0));
        assert!((c.r - 1.0).abs() < f32::EPSILON);
        assert!((c.g - 136.0 / 255.0).abs() < 1e-6);
        assert!(c.b.abs() < f32::EPSILON);
    }

    #[test]
    fn rgb_from_hex_no_hash() {
        let c = Rgb::from_hex("0091ff").unwrap();
        assert_eq!(c, Rgb::from_bytes(0, 145, 255));
    }

    #[test]
    fn rgb_from_hex_invalid() {
        assert!(Rgb::from_hex("zzzzzz").is_none());
        assert!(Rgb::from_hex("#abc").is_none());
        assert!(Rgb::from_hex("#ff880080").is_none());
        assert!(Rgb::from_hex("").is_none());
    }

    #[test]
    fn rgb_to_hex() {
        assert_eq!(Rgb::from_bytes(255, 0, 128).to_hex(), "#ff0080");
    }

    #[test]
    fn rgb_hex_survives_reparse() {
        let original = Rgb::from_bytes(171, 205, 239);
        let parsed = Rgb::from_hex(&original.to_hex()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn rgb_array_conversion() {
        let c = Rgb::new(0.25, 0.5, 0.75);
        let arr: [f32; 3] = c.into();
        assert_eq!(arr, [0.25, 0.5, 0.75]);
        assert_eq!(Rgb::from(arr), c);
    }

    #[test]
    fn rgb_to_linear_keeps_endpoints() {
        let black = Rgb::BLACK.to_linear();
        let white = Rgb::new(1.0, 1.0, 1.0).to_linear();
        assert!(black.r.abs() < 1e-6);
        assert!((white.g - 1.0).abs() < 1e-6);
        // Mid-grey darkens in linear space.
        assert!(Rgb::new(0.5, 0.5, 0.5).to_linear().b < 0.5);
    }

    #[test]
    fn rgb_serialization() {
        let c = Rgb::new(0.1, 0.2, 0.3);
        let json = serde_json::to_string(&c).unwrap();
        let deserialized: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(c, deserialized);
    }
}
