//! Embedded survey dataset and CSV decoding.

use super::survey::SurveyRow;

/// The survey ships with the app; every chart re-reads it on mount so each
/// view stays an independent, stateless transform over the same rows.
pub const SURVEY_CSV: &str = include_str!("../../assets/data/StudentMentalhealth.csv");

pub fn decode_rows(raw: &str) -> Result<Vec<SurveyRow>, csv::Error> {
    let mut reader = csv::Reader::from_reader(raw.as_bytes());
    reader.deserialize().collect()
}

pub fn load_rows() -> Result<Vec<SurveyRow>, csv::Error> {
    decode_rows(SURVEY_CSV)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_decodes() {
        let rows = load_rows().expect("embedded CSV should decode");
        assert!(rows.len() >= 50, "dataset unexpectedly small: {}", rows.len());
    }

    #[test]
    fn missing_columns_default_to_empty() {
        let rows = decode_rows("Choose your gender\nFemale\n").expect("decode");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].gender, "Female");
        assert_eq!(rows[0].sought_help, "");
    }
}
