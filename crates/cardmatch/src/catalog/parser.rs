use super::features::flags_from_card_text;
use super::CardRecord;
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<CardRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<CardRow>() {
        records.push(record?.into_record());
    }

    Ok(records)
}

/// One raw dataset row. Every column is optional so sparse exports load
/// cleanly; absent cells become empty strings downstream.
#[derive(Debug, Deserialize)]
struct CardRow {
    #[serde(rename = "Card Name", default, deserialize_with = "trimmed_string")]
    card_name: String,
    #[serde(rename = "Issuer", default, deserialize_with = "trimmed_string")]
    issuer: String,
    #[serde(rename = "Annual Fee", default, deserialize_with = "trimmed_string")]
    annual_fee: String,
    #[serde(rename = "Joining Fee", default, deserialize_with = "trimmed_string")]
    joining_fee: String,
    #[serde(rename = "Min Credit Score", default, deserialize_with = "trimmed_string")]
    min_credit_score: String,
    #[serde(
        rename = "Min Income Requirement",
        default,
        deserialize_with = "trimmed_string"
    )]
    min_income_requirement: String,
    #[serde(rename = "Reward Structure", default, deserialize_with = "trimmed_string")]
    reward_structure: String,
    #[serde(rename = "Premium Services", default, deserialize_with = "trimmed_string")]
    premium_services: String,
    #[serde(rename = "Travel Benefits", default, deserialize_with = "trimmed_string")]
    travel_benefits: String,
    #[serde(rename = "Lifestyle Benefits", default, deserialize_with = "trimmed_string")]
    lifestyle_benefits: String,
    #[serde(rename = "Ideal For", default, deserialize_with = "trimmed_string")]
    ideal_for: String,
}

impl CardRow {
    fn into_record(self) -> CardRecord {
        let features = flags_from_card_text(
            &self.reward_structure,
            &self.premium_services,
            &self.travel_benefits,
            &self.lifestyle_benefits,
        );

        CardRecord {
            name: self.card_name,
            issuer: self.issuer,
            annual_fee: self.annual_fee,
            joining_fee: self.joining_fee,
            min_credit_score: lenient_integer(&self.min_credit_score),
            min_income: lenient_number(&self.min_income_requirement),
            reward_structure: self.reward_structure,
            premium_services: self.premium_services,
            travel_benefits: self.travel_benefits,
            lifestyle_benefits: self.lifestyle_benefits,
            ideal_for: self.ideal_for,
            features,
        }
    }
}

fn trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.map(|value| value.trim().to_string()).unwrap_or_default())
}

/// Threshold columns parse leniently: a blank or garbled cell reads as zero,
/// which never excludes a card on its own.
fn lenient_integer(raw: &str) -> u16 {
    raw.parse::<u16>()
        .or_else(|_| raw.parse::<f64>().map(|value| value as u16))
        .unwrap_or(0)
}

fn lenient_number(raw: &str) -> f64 {
    raw.parse::<f64>().unwrap_or(0.0)
}
