//! VISTA record types
//!
//! Plain value records backing the dashboard panels. None of them carry behaviour beyond
//! a few display helpers; they are serialised as-is by the export workflow.

use serde::Serialize;

/// Headline figures shown on the overview cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpiMetrics {
    pub total_posts: u64,
    pub platforms: u32,
    pub avg_sentiment: f64,
    pub top_emotion: &'static str,
    pub time_range: &'static str,
}

/// Overall polarity split, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentData {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

/// Emotion split, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmotionData {
    pub joy: f64,
    pub anger: f64,
    pub fear: f64,
    pub sadness: f64,
    pub surprise: f64,
    pub trust: f64,
}

impl EmotionData {
    /// Emotions in declaration order with their capitalised names.
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("Joy", self.joy),
            ("Anger", self.anger),
            ("Fear", self.fear),
            ("Sadness", self.sadness),
            ("Surprise", self.surprise),
            ("Trust", self.trust),
        ]
    }
}

/// Share of voice for a single platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceData {
    pub platform: &'static str,
    pub volume: u64,
    pub percentage: f64,
    /// Brand colour as `#rrggbb`.
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InfluencerData {
    pub name: &'static str,
    pub platform: &'static str,
    pub reach: u64,
    /// Engagement rate in percent.
    pub engagement: f64,
    pub sentiment: f64,
}

/// A labelled narrative theme positioned on the spread/depth plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NarrativeCluster {
    pub id: &'static str,
    pub label: &'static str,
    pub volume: u64,
    pub sentiment: f64,
    pub x: f64,
    pub y: f64,
    pub description: &'static str,
}

/// One month of the conversation time series. `date` is `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSeriesData {
    pub date: &'static str,
    pub volume: u64,
    pub sentiment: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlignmentData {
    pub pillar: &'static str,
    pub theme: &'static str,
    pub score: f64,
    pub volume: u64,
    pub relevance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeographicData {
    pub country: &'static str,
    pub volume: u64,
    pub sentiment: f64,
    /// Longitude, latitude.
    pub coordinates: (f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Misinterpretation {
    pub topic: &'static str,
    pub misinterpretation: &'static str,
    pub frequency: u64,
    pub impact: Impact,
}

/// Theme placed by policy relevance against public resonance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuadrantPoint {
    pub theme: &'static str,
    pub relevance: f64,
    pub resonance: f64,
    pub volume: u64,
    pub sentiment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SourceVolume {
    pub year: &'static str,
    pub social_media: u64,
    pub news_media: u64,
    pub government: u64,
    pub ngos: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Keyword {
    pub text: &'static str,
    pub value: u32,
    pub sentiment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    pub frame: &'static str,
    pub percentage: f64,
    pub sentiment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
pub enum Risk {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EchoChamber {
    pub platform: &'static str,
    pub score: f64,
    pub risk: Risk,
}

/// Per-platform sentiment for one narrative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlatformDivergence {
    pub narrative: &'static str,
    pub twitter: f64,
    pub facebook: f64,
    pub instagram: f64,
    pub linkedin: f64,
}

impl PlatformDivergence {
    pub fn platforms(&self) -> [(&'static str, f64); 4] {
        [
            ("twitter", self.twitter),
            ("facebook", self.facebook),
            ("instagram", self.instagram),
            ("linkedin", self.linkedin),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LifecyclePoint {
    pub month: &'static str,
    pub economic_recovery: u64,
    pub healthcare_reform: u64,
    pub climate_action: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventAnnotation {
    pub date: &'static str,
    pub event: &'static str,
    pub impact: Impact,
    pub sentiment: f64,
}

/// Forecast month. The first entry carries the last actual volume only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub date: &'static str,
    pub actual: Option<u64>,
    pub forecast: Option<u64>,
    pub upper: Option<u64>,
    pub lower: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmotionTimelinePoint {
    pub date: &'static str,
    pub joy: u32,
    pub anger: u32,
    pub fear: u32,
    pub trust: u32,
    pub sadness: u32,
    pub surprise: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyVolume {
    pub year: &'static str,
    pub volume: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PillarScore {
    pub pillar: &'static str,
    pub score: f64,
}

/// Alignment of one theme with each vision pillar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThemePillarRow {
    pub theme: &'static str,
    pub economic: f64,
    pub social: f64,
    pub environmental: f64,
    pub governance: f64,
    pub innovation: f64,
}

impl ThemePillarRow {
    pub fn pillars(&self) -> [(&'static str, f64); 5] {
        [
            ("economic", self.economic),
            ("social", self.social),
            ("environmental", self.environmental),
            ("governance", self.governance),
            ("innovation", self.innovation),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PillarTrendPoint {
    pub month: &'static str,
    pub economic: f64,
    pub social: f64,
    pub environmental: f64,
    pub governance: f64,
    pub innovation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GapAnalysis {
    pub area: &'static str,
    pub public_sentiment: f64,
    pub policy_priority: f64,
    pub gap: f64,
    pub status: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Rising,
    Stable,
    Falling,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Momentum {
    pub theme: &'static str,
    pub momentum: f64,
    pub change: &'static str,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlatformBenchmark {
    pub platform: &'static str,
    pub volume: u64,
    pub sentiment: f64,
    pub engagement: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CountryBenchmark {
    pub country: &'static str,
    pub sentiment: f64,
    pub volume: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparativeTrend {
    pub month: &'static str,
    pub domestic: f64,
    pub usa: f64,
    pub uk: f64,
    pub canada: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Technique {
    pub name: &'static str,
    pub description: &'static str,
}

/// One VISTA analysis dimension with its techniques and outputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Method {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub techniques: &'static [Technique],
    pub metrics: &'static [&'static str],
    pub visualization: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PipelineStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
}

/// Group of label/value rows in the technical specifications card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpecGroup {
    pub title: &'static str,
    pub rows: &'static [(&'static str, &'static str)],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecentExport {
    pub name: &'static str,
    pub date: &'static str,
    pub size: &'static str,
    pub kind: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Guideline {
    pub title: &'static str,
    pub body: &'static str,
}
