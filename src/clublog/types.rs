use serde::{
    de::{Error, IgnoredAny, SeqAccess, Visitor},
    Deserialize, Deserializer,
};
use std::collections::BTreeMap;
use std::fmt;


/// Amateur bands reported by the league, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    M160,
    M80,
    M60,
    M40,
    M30,
    M20,
    M17,
    M15,
    M12,
    M10,
    M6,
    M4,
    M2,
    Cm70,
    Cm23,
    Cm13,
}

impl Band {
    pub const ALL: [Band; 16] = [
        Band::M160,
        Band::M80,
        Band::M60,
        Band::M40,
        Band::M30,
        Band::M20,
        Band::M17,
        Band::M15,
        Band::M12,
        Band::M10,
        Band::M6,
        Band::M4,
        Band::M2,
        Band::Cm70,
        Band::Cm23,
        Band::Cm13,
    ];

    /// Key used for this band in the league response.
    pub fn key(&self) -> &'static str {
        match self {
            Band::M160 => "160",
            Band::M80 => "80",
            Band::M60 => "60",
            Band::M40 => "40",
            Band::M30 => "30",
            Band::M20 => "20",
            Band::M17 => "17",
            Band::M15 => "15",
            Band::M12 => "12",
            Band::M10 => "10",
            Band::M6 => "6",
            Band::M4 => "4",
            Band::M2 => "2",
            Band::Cm70 => "70",
            Band::Cm23 => "23",
            Band::Cm13 => "13",
        }
    }

    /// Column heading for this band in the CSV output.
    pub fn column(&self) -> &'static str {
        match self {
            Band::M160 => "160M",
            Band::M80 => "80M",
            Band::M60 => "60M",
            Band::M40 => "40M",
            Band::M30 => "30M",
            Band::M20 => "20M",
            Band::M17 => "17M",
            Band::M15 => "15M",
            Band::M12 => "12M",
            Band::M10 => "10M",
            Band::M6 => "6M",
            Band::M4 => "4M",
            Band::M2 => "2M",
            Band::Cm70 => "70CM",
            Band::Cm23 => "23CM",
            Band::Cm13 => "13CM",
        }
    }
}

/// Per-band slot counts for one call, indexed in [`Band::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BandCounts([u32; 16]);

impl BandCounts {
    pub fn new(counts: [u32; 16]) -> Self {
        Self(counts)
    }

    pub fn get(&self, band: Band) -> u32 {
        self.0[band as usize]
    }

    /// Every band must be present; keys for bands we do not report are ignored.
    fn from_keyed(keyed: &BTreeMap<String, u32>) -> Result<Self, String> {
        let mut counts = [0u32; 16];
        for band in Band::ALL {
            counts[band as usize] = *keyed
                .get(band.key())
                .ok_or_else(|| format!("missing count for band {}", band.key()))?;
        }
        Ok(Self(counts))
    }
}

/// Ranks are usually numbers but older league exports quote them.
fn de_rank<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RankRepr {
        Number(u32),
        Text(String),
    }

    match RankRepr::deserialize(deserializer)? {
        RankRepr::Number(n) => Ok(n),
        RankRepr::Text(s) => s.trim().parse::<u32>().map_err(D::Error::custom),
    }
}

#[derive(Deserialize)]
struct Rank(#[serde(deserialize_with = "de_rank")] u32);

impl<'de> Deserialize<'de> for BandCounts {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let keyed: BTreeMap<String, u32> = Deserialize::deserialize(deserializer)?;
        BandCounts::from_keyed(&keyed).map_err(D::Error::custom)
    }
}

/// One league entry as Club Log sends it:
/// `[rank, call, dxcc_count, slot_count, {band: count, ...}]`.
///
/// Elements after the band counts are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow(pub u32, pub String, pub u32, pub u32, pub BandCounts);

struct RawRowVisitor;

impl<'de> Visitor<'de> for RawRowVisitor {
    type Value = RawRow;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an array [rank, call, dxcc, slots, {band: count}]")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<RawRow, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let Rank(rank) = seq
            .next_element()?
            .ok_or_else(|| A::Error::invalid_length(0, &self))?;
        let call = seq
            .next_element()?
            .ok_or_else(|| A::Error::invalid_length(1, &self))?;
        let dxcc = seq
            .next_element()?
            .ok_or_else(|| A::Error::invalid_length(2, &self))?;
        let slots = seq
            .next_element()?
            .ok_or_else(|| A::Error::invalid_length(3, &self))?;
        let bands = seq
            .next_element()?
            .ok_or_else(|| A::Error::invalid_length(4, &self))?;

        while seq.next_element::<IgnoredAny>()?.is_some() {}

        Ok(RawRow(rank, call, dxcc, slots, bands))
    }
}

impl<'de> Deserialize<'de> for RawRow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(RawRowVisitor)
    }
}

impl RawRow {
    pub fn rank(&self) -> u32 {
        self.0
    }

    pub fn call(&self) -> &str {
        &self.1
    }

    pub fn dxcc(&self) -> u32 {
        self.2
    }

    pub fn slots(&self) -> u32 {
        self.3
    }

    pub fn bands(&self) -> &BandCounts {
        &self.4
    }
}

/// One league entry after re-ranking, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedRow {
    pub rank: u32,
    pub call: String,
    pub dxcc: u32,
    pub slots: u32,
    pub bands: BandCounts,
}

impl ProcessedRow {
    /// Fixed output heading: rank, call, totals, then one column per band.
    pub fn header() -> Vec<&'static str> {
        let mut header = vec!["Rank", "Call", "DXCCs", "Slots"];
        header.extend(Band::ALL.iter().map(Band::column));
        header
    }

    /// Field values in the same order as [`ProcessedRow::header`].
    pub fn record(&self) -> Vec<String> {
        let mut record = vec![
            self.rank.to_string(),
            self.call.clone(),
            self.dxcc.to_string(),
            self.slots.to_string(),
        ];
        record.extend(Band::ALL.iter().map(|band| self.bands.get(*band).to_string()));
        record
    }
}
