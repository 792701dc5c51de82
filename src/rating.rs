/// Qualitative band for an overall score percentage.
pub fn rating(percent: f64) -> &'static str {
    match percent {
        p if p >= 85.0 => "Excellent",
        p if p >= 70.0 => "Good",
        p if p >= 50.0 => "Fair",
        p if p >= 30.0 => "Weak",
        _ => "Critical",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_thresholds() {
        assert_eq!(rating(100.0), "Excellent");
        assert_eq!(rating(85.0), "Excellent");
        assert_eq!(rating(84.9), "Good");
        assert_eq!(rating(70.0), "Good");
        assert_eq!(rating(55.0), "Fair");
        assert_eq!(rating(30.0), "Weak");
        assert_eq!(rating(10.0), "Critical");
        assert_eq!(rating(f64::NAN), "Critical");
    }
}
