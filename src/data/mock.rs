//! The VISTA dataset.
//!
//! Every figure shown by the dashboard is a constant defined here. Panels read these
//! records on mount and never mutate them.

use super::types::*;

pub const KPI_METRICS: KpiMetrics = KpiMetrics {
    total_posts: 1_247_863,
    platforms: 8,
    avg_sentiment: 0.34,
    top_emotion: "Trust",
    time_range: "2023-2024",
};

pub const SENTIMENT: SentimentData = SentimentData {
    positive: 45.2,
    negative: 23.8,
    neutral: 31.0,
};

pub const EMOTIONS: EmotionData = EmotionData {
    joy: 28.5,
    anger: 15.2,
    fear: 12.8,
    sadness: 8.3,
    surprise: 18.7,
    trust: 16.5,
};

pub const VOICE: &[VoiceData] = &[
    VoiceData { platform: "Twitter/X", volume: 456_789, percentage: 36.6, color: "#8B1538" },
    VoiceData { platform: "Facebook", volume: 321_456, percentage: 25.8, color: "#B8425A" },
    VoiceData { platform: "Instagram", volume: 198_765, percentage: 15.9, color: "#2d2d2d" },
    VoiceData { platform: "LinkedIn", volume: 134_567, percentage: 10.8, color: "#6b6b6b" },
    VoiceData { platform: "TikTok", volume: 89_234, percentage: 7.2, color: "#a0a0a0" },
    VoiceData { platform: "YouTube", volume: 46_852, percentage: 3.7, color: "#505050" },
];

pub const INFLUENCERS: &[InfluencerData] = &[
    InfluencerData { name: "@PolicyWatchDog", platform: "Twitter/X", reach: 892_000, engagement: 4.2, sentiment: 0.23 },
    InfluencerData { name: "CitizenVoice Official", platform: "Facebook", reach: 567_000, engagement: 3.8, sentiment: 0.45 },
    InfluencerData { name: "@GovAccountability", platform: "Twitter/X", reach: 445_000, engagement: 5.1, sentiment: -0.12 },
    InfluencerData { name: "PublicPolicy Hub", platform: "LinkedIn", reach: 234_000, engagement: 2.9, sentiment: 0.67 },
    InfluencerData { name: "@CivicEngagement", platform: "Instagram", reach: 189_000, engagement: 6.3, sentiment: 0.34 },
];

pub const NARRATIVE_CLUSTERS: &[NarrativeCluster] = &[
    NarrativeCluster {
        id: "cluster1",
        label: "Economic Recovery",
        volume: 234_567,
        sentiment: 0.23,
        x: 0.3,
        y: 0.6,
        description: "Discussions around post-pandemic economic policies and recovery measures",
    },
    NarrativeCluster {
        id: "cluster2",
        label: "Healthcare Reform",
        volume: 189_432,
        sentiment: -0.15,
        x: 0.7,
        y: 0.4,
        description: "Debates on healthcare accessibility and policy changes",
    },
    NarrativeCluster {
        id: "cluster3",
        label: "Climate Action",
        volume: 167_891,
        sentiment: 0.45,
        x: 0.2,
        y: 0.8,
        description: "Environmental policies and climate change initiatives",
    },
    NarrativeCluster {
        id: "cluster4",
        label: "Education Policy",
        volume: 134_567,
        sentiment: 0.12,
        x: 0.8,
        y: 0.7,
        description: "Educational reforms and funding discussions",
    },
    NarrativeCluster {
        id: "cluster5",
        label: "Digital Infrastructure",
        volume: 98_765,
        sentiment: 0.56,
        x: 0.5,
        y: 0.3,
        description: "Technology adoption and digital transformation in public services",
    },
];

pub const TIME_SERIES: &[TimeSeriesData] = &[
    TimeSeriesData { date: "2023-01", volume: 89_234, sentiment: 0.12, positive: 42.1, negative: 28.3, neutral: 29.6 },
    TimeSeriesData { date: "2023-02", volume: 92_156, sentiment: 0.18, positive: 44.2, negative: 26.8, neutral: 29.0 },
    TimeSeriesData { date: "2023-03", volume: 95_432, sentiment: 0.23, positive: 46.1, negative: 24.9, neutral: 29.0 },
    TimeSeriesData { date: "2023-04", volume: 87_654, sentiment: 0.15, positive: 43.5, negative: 27.2, neutral: 29.3 },
    TimeSeriesData { date: "2023-05", volume: 104_567, sentiment: 0.31, positive: 48.7, negative: 22.1, neutral: 29.2 },
    TimeSeriesData { date: "2023-06", volume: 112_890, sentiment: 0.28, positive: 47.3, negative: 23.5, neutral: 29.2 },
    TimeSeriesData { date: "2023-07", volume: 98_765, sentiment: 0.22, positive: 45.8, negative: 25.4, neutral: 28.8 },
    TimeSeriesData { date: "2023-08", volume: 106_432, sentiment: 0.35, positive: 49.2, negative: 21.7, neutral: 29.1 },
    TimeSeriesData { date: "2023-09", volume: 89_123, sentiment: 0.19, positive: 44.6, negative: 26.9, neutral: 28.5 },
    TimeSeriesData { date: "2023-10", volume: 115_678, sentiment: 0.42, positive: 51.3, negative: 19.8, neutral: 28.9 },
    TimeSeriesData { date: "2023-11", volume: 123_456, sentiment: 0.38, positive: 50.1, negative: 21.2, neutral: 28.7 },
    TimeSeriesData { date: "2023-12", volume: 108_901, sentiment: 0.33, positive: 48.9, negative: 22.6, neutral: 28.5 },
    TimeSeriesData { date: "2024-01", volume: 134_567, sentiment: 0.29, positive: 47.8, negative: 23.8, neutral: 28.4 },
    TimeSeriesData { date: "2024-02", volume: 128_934, sentiment: 0.26, positive: 46.9, negative: 24.7, neutral: 28.4 },
    TimeSeriesData { date: "2024-03", volume: 142_356, sentiment: 0.34, positive: 49.1, negative: 22.1, neutral: 28.8 },
];

pub const ALIGNMENT: &[AlignmentData] = &[
    AlignmentData { pillar: "Economic Growth", theme: "Economic Recovery", score: 0.78, volume: 234_567, relevance: 0.89 },
    AlignmentData { pillar: "Economic Growth", theme: "Digital Infrastructure", score: 0.65, volume: 98_765, relevance: 0.72 },
    AlignmentData { pillar: "Social Welfare", theme: "Healthcare Reform", score: 0.82, volume: 189_432, relevance: 0.94 },
    AlignmentData { pillar: "Social Welfare", theme: "Education Policy", score: 0.71, volume: 134_567, relevance: 0.85 },
    AlignmentData { pillar: "Environmental", theme: "Climate Action", score: 0.91, volume: 167_891, relevance: 0.96 },
    AlignmentData { pillar: "Governance", theme: "Digital Infrastructure", score: 0.58, volume: 98_765, relevance: 0.63 },
    AlignmentData { pillar: "Innovation", theme: "Digital Infrastructure", score: 0.87, volume: 98_765, relevance: 0.91 },
    AlignmentData { pillar: "Innovation", theme: "Education Policy", score: 0.62, volume: 134_567, relevance: 0.71 },
];

pub const GEOGRAPHIC: &[GeographicData] = &[
    GeographicData { country: "United States", volume: 425_678, sentiment: 0.23, coordinates: (-95.7129, 37.0902) },
    GeographicData { country: "United Kingdom", volume: 189_234, sentiment: 0.31, coordinates: (-3.4360, 55.3781) },
    GeographicData { country: "Canada", volume: 145_632, sentiment: 0.42, coordinates: (-106.3468, 56.1304) },
    GeographicData { country: "Australia", volume: 98_756, sentiment: 0.38, coordinates: (133.7751, -25.2744) },
    GeographicData { country: "Germany", volume: 167_891, sentiment: 0.19, coordinates: (10.4515, 51.1657) },
    GeographicData { country: "France", volume: 134_567, sentiment: 0.27, coordinates: (2.2137, 46.2276) },
];

pub const KEY_INSIGHTS: &[&str] = &[
    "Climate Action narratives show strongest positive sentiment (+45%) with increasing momentum",
    "Economic Recovery discussions dominate volume (23.4% of total) but show mixed sentiment",
    "Healthcare Reform generates significant engagement but with polarized sentiment patterns",
];

pub const MISINTERPRETATIONS: &[Misinterpretation] = &[
    Misinterpretation {
        topic: "Healthcare Policy",
        misinterpretation: "Universal healthcare = government takeover",
        frequency: 1247,
        impact: Impact::High,
    },
    Misinterpretation {
        topic: "Climate Action",
        misinterpretation: "Carbon tax = job losses",
        frequency: 892,
        impact: Impact::Medium,
    },
    Misinterpretation {
        topic: "Education Reform",
        misinterpretation: "Curriculum changes = political indoctrination",
        frequency: 634,
        impact: Impact::Medium,
    },
];

// Overview

pub const OVERVIEW_QUADRANT: &[QuadrantPoint] = &[
    QuadrantPoint { theme: "Economic Recovery", relevance: 0.89, resonance: 0.78, volume: 234_567, sentiment: 0.23 },
    QuadrantPoint { theme: "Healthcare Reform", relevance: 0.94, resonance: 0.82, volume: 189_432, sentiment: -0.15 },
    QuadrantPoint { theme: "Climate Action", relevance: 0.96, resonance: 0.91, volume: 167_891, sentiment: 0.45 },
    QuadrantPoint { theme: "Education Policy", relevance: 0.85, resonance: 0.71, volume: 134_567, sentiment: 0.12 },
    QuadrantPoint { theme: "Digital Infrastructure", relevance: 0.91, resonance: 0.87, volume: 98_765, sentiment: 0.56 },
];

// Voice

pub const SOURCE_VOLUME: &[SourceVolume] = &[
    SourceVolume { year: "2023", social_media: 890_234, news_media: 234_567, government: 123_456, ngos: 67_890 },
    SourceVolume { year: "2024", social_media: 1_120_456, news_media: 298_734, government: 156_789, ngos: 89_234 },
];

// Interpretation

pub const KEYWORDS: &[Keyword] = &[
    Keyword { text: "healthcare", value: 89, sentiment: 0.23 },
    Keyword { text: "economy", value: 76, sentiment: 0.15 },
    Keyword { text: "climate", value: 67, sentiment: 0.45 },
    Keyword { text: "education", value: 54, sentiment: 0.12 },
    Keyword { text: "jobs", value: 48, sentiment: 0.31 },
    Keyword { text: "policy", value: 42, sentiment: 0.08 },
    Keyword { text: "reform", value: 38, sentiment: -0.12 },
    Keyword { text: "budget", value: 35, sentiment: -0.21 },
    Keyword { text: "innovation", value: 32, sentiment: 0.56 },
    Keyword { text: "community", value: 28, sentiment: 0.42 },
];

pub const FRAMES: &[Frame] = &[
    Frame { frame: "Problem-focused", percentage: 34.2, sentiment: -0.15 },
    Frame { frame: "Solution-oriented", percentage: 28.7, sentiment: 0.42 },
    Frame { frame: "Neutral/Factual", percentage: 22.1, sentiment: 0.05 },
    Frame { frame: "Emotional/Personal", percentage: 15.0, sentiment: 0.23 },
];

// Storyline

pub const ECHO_CHAMBERS: &[EchoChamber] = &[
    EchoChamber { platform: "Twitter/X", score: 0.67, risk: Risk::Medium },
    EchoChamber { platform: "Facebook", score: 0.82, risk: Risk::High },
    EchoChamber { platform: "Instagram", score: 0.45, risk: Risk::Low },
    EchoChamber { platform: "LinkedIn", score: 0.34, risk: Risk::Low },
    EchoChamber { platform: "TikTok", score: 0.78, risk: Risk::High },
];

pub const PLATFORM_DIVERGENCE: &[PlatformDivergence] = &[
    PlatformDivergence { narrative: "Economic Recovery", twitter: 0.23, facebook: 0.45, instagram: 0.12, linkedin: 0.67 },
    PlatformDivergence { narrative: "Healthcare Reform", twitter: -0.15, facebook: -0.32, instagram: 0.08, linkedin: -0.21 },
    PlatformDivergence { narrative: "Climate Action", twitter: 0.45, facebook: 0.38, instagram: 0.56, linkedin: 0.42 },
    PlatformDivergence { narrative: "Education Policy", twitter: 0.12, facebook: 0.08, instagram: 0.23, linkedin: 0.34 },
    PlatformDivergence { narrative: "Digital Infrastructure", twitter: 0.56, facebook: 0.43, instagram: 0.34, linkedin: 0.78 },
];

pub const NARRATIVE_LIFECYCLE: &[LifecyclePoint] = &[
    LifecyclePoint { month: "Jan", economic_recovery: 45_000, healthcare_reform: 32_000, climate_action: 28_000 },
    LifecyclePoint { month: "Feb", economic_recovery: 52_000, healthcare_reform: 38_000, climate_action: 31_000 },
    LifecyclePoint { month: "Mar", economic_recovery: 48_000, healthcare_reform: 45_000, climate_action: 35_000 },
    LifecyclePoint { month: "Apr", economic_recovery: 58_000, healthcare_reform: 42_000, climate_action: 42_000 },
    LifecyclePoint { month: "May", economic_recovery: 62_000, healthcare_reform: 39_000, climate_action: 48_000 },
    LifecyclePoint { month: "Jun", economic_recovery: 55_000, healthcare_reform: 41_000, climate_action: 52_000 },
];

/// Quote shown on every storyline card.
pub const STORYLINE_QUOTE: &str =
    "\"Government needs to act more decisively on this issue to restore public confidence...\"";

// Trajectory

pub const EVENT_ANNOTATIONS: &[EventAnnotation] = &[
    EventAnnotation { date: "2023-05", event: "Policy Announcement", impact: Impact::High, sentiment: 0.31 },
    EventAnnotation { date: "2023-10", event: "Budget Release", impact: Impact::High, sentiment: 0.42 },
    EventAnnotation { date: "2024-01", event: "New Year Address", impact: Impact::Medium, sentiment: 0.29 },
    EventAnnotation { date: "2024-03", event: "Legislative Session", impact: Impact::High, sentiment: 0.34 },
];

pub const FORECAST: &[ForecastPoint] = &[
    ForecastPoint { date: "2024-04", actual: Some(142_356), forecast: None, upper: None, lower: None },
    ForecastPoint { date: "2024-05", actual: None, forecast: Some(148_000), upper: Some(165_000), lower: Some(131_000) },
    ForecastPoint { date: "2024-06", actual: None, forecast: Some(152_000), upper: Some(171_000), lower: Some(133_000) },
    ForecastPoint { date: "2024-07", actual: None, forecast: Some(147_000), upper: Some(168_000), lower: Some(126_000) },
    ForecastPoint { date: "2024-08", actual: None, forecast: Some(159_000), upper: Some(183_000), lower: Some(135_000) },
    ForecastPoint { date: "2024-09", actual: None, forecast: Some(163_000), upper: Some(189_000), lower: Some(137_000) },
];

pub const FORECAST_SUMMARY: &[(&str, &str)] = &[
    ("Expected Growth", "+12.4%"),
    ("Confidence", "78%"),
    ("Model", "ARIMA + LSTM"),
];

pub const EMOTION_TIMELINE: &[EmotionTimelinePoint] = &[
    EmotionTimelinePoint { date: "2023-01", joy: 22, anger: 18, fear: 15, trust: 14, sadness: 12, surprise: 19 },
    EmotionTimelinePoint { date: "2023-03", joy: 25, anger: 16, fear: 13, trust: 16, sadness: 10, surprise: 20 },
    EmotionTimelinePoint { date: "2023-05", joy: 32, anger: 12, fear: 11, trust: 19, sadness: 8, surprise: 18 },
    EmotionTimelinePoint { date: "2023-07", joy: 28, anger: 14, fear: 12, trust: 17, sadness: 9, surprise: 20 },
    EmotionTimelinePoint { date: "2023-09", joy: 26, anger: 15, fear: 14, trust: 15, sadness: 11, surprise: 19 },
    EmotionTimelinePoint { date: "2023-11", joy: 30, anger: 13, fear: 10, trust: 18, sadness: 9, surprise: 20 },
    EmotionTimelinePoint { date: "2024-01", joy: 27, anger: 16, fear: 13, trust: 16, sadness: 10, surprise: 18 },
    EmotionTimelinePoint { date: "2024-03", joy: 29, anger: 15, fear: 12, trust: 17, sadness: 9, surprise: 18 },
];

pub const YEARLY_VOLUME: &[YearlyVolume] = &[
    YearlyVolume { year: "2020", volume: 876_543 },
    YearlyVolume { year: "2021", volume: 1_023_456 },
    YearlyVolume { year: "2022", volume: 1_156_789 },
    YearlyVolume { year: "2023", volume: 1_289_012 },
    YearlyVolume { year: "2024", volume: 1_347_865 },
];

pub const GROWTH_METRICS: &[(&str, &str)] = &[("+24.3%", "2024 vs 2023"), ("54.2%", "5-year growth")];

// Alignment

pub const PILLAR_ALIGNMENT: &[PillarScore] = &[
    PillarScore { pillar: "Economic Growth", score: 0.72 },
    PillarScore { pillar: "Social Welfare", score: 0.77 },
    PillarScore { pillar: "Environmental", score: 0.91 },
    PillarScore { pillar: "Governance", score: 0.58 },
    PillarScore { pillar: "Innovation", score: 0.75 },
    PillarScore { pillar: "Security", score: 0.63 },
];

pub const THEME_PILLAR_HEATMAP: &[ThemePillarRow] = &[
    ThemePillarRow { theme: "Economic Recovery", economic: 0.78, social: 0.45, environmental: 0.23, governance: 0.34, innovation: 0.56 },
    ThemePillarRow { theme: "Healthcare Reform", economic: 0.32, social: 0.82, environmental: 0.19, governance: 0.67, innovation: 0.43 },
    ThemePillarRow { theme: "Climate Action", economic: 0.41, social: 0.56, environmental: 0.91, governance: 0.72, innovation: 0.68 },
    ThemePillarRow { theme: "Education Policy", economic: 0.52, social: 0.71, environmental: 0.28, governance: 0.58, innovation: 0.62 },
    ThemePillarRow { theme: "Digital Infrastructure", economic: 0.65, social: 0.39, environmental: 0.34, governance: 0.58, innovation: 0.87 },
];

pub const ALIGNMENT_TRENDS: &[PillarTrendPoint] = &[
    PillarTrendPoint { month: "Jan", economic: 0.68, social: 0.72, environmental: 0.85, governance: 0.52, innovation: 0.69 },
    PillarTrendPoint { month: "Feb", economic: 0.71, social: 0.74, environmental: 0.87, governance: 0.54, innovation: 0.72 },
    PillarTrendPoint { month: "Mar", economic: 0.69, social: 0.76, environmental: 0.89, governance: 0.56, innovation: 0.74 },
    PillarTrendPoint { month: "Apr", economic: 0.72, social: 0.77, environmental: 0.91, governance: 0.58, innovation: 0.75 },
    PillarTrendPoint { month: "May", economic: 0.74, social: 0.78, environmental: 0.93, governance: 0.59, innovation: 0.77 },
    PillarTrendPoint { month: "Jun", economic: 0.72, social: 0.77, environmental: 0.91, governance: 0.58, innovation: 0.75 },
];

pub const GAP_ANALYSIS: &[GapAnalysis] = &[
    GapAnalysis { area: "Economic Growth", public_sentiment: 0.23, policy_priority: 0.78, gap: -0.55, status: "Under-addressed" },
    GapAnalysis { area: "Healthcare Reform", public_sentiment: -0.15, policy_priority: 0.45, gap: -0.60, status: "Misaligned" },
    GapAnalysis { area: "Climate Action", public_sentiment: 0.45, policy_priority: 0.72, gap: -0.27, status: "Well-aligned" },
    GapAnalysis { area: "Education Policy", public_sentiment: 0.12, policy_priority: 0.56, gap: -0.44, status: "Moderate gap" },
    GapAnalysis { area: "Digital Infrastructure", public_sentiment: 0.56, policy_priority: 0.68, gap: -0.12, status: "Well-aligned" },
];

// Meta

pub const RELEVANCE_RESONANCE: &[QuadrantPoint] = &[
    QuadrantPoint { theme: "Economic Recovery", relevance: 0.89, resonance: 0.78, volume: 234_567, sentiment: 0.23 },
    QuadrantPoint { theme: "Healthcare Reform", relevance: 0.94, resonance: 0.82, volume: 189_432, sentiment: -0.15 },
    QuadrantPoint { theme: "Climate Action", relevance: 0.96, resonance: 0.91, volume: 167_891, sentiment: 0.45 },
    QuadrantPoint { theme: "Education Policy", relevance: 0.85, resonance: 0.71, volume: 134_567, sentiment: 0.12 },
    QuadrantPoint { theme: "Digital Infrastructure", relevance: 0.91, resonance: 0.87, volume: 98_765, sentiment: 0.56 },
    QuadrantPoint { theme: "Transport Policy", relevance: 0.72, resonance: 0.64, volume: 87_654, sentiment: 0.08 },
    QuadrantPoint { theme: "Housing Reform", relevance: 0.68, resonance: 0.45, volume: 76_543, sentiment: -0.21 },
    QuadrantPoint { theme: "Energy Policy", relevance: 0.81, resonance: 0.73, volume: 65_432, sentiment: 0.31 },
];

pub const QUADRANT_LEGEND: &[(&str, &str)] = &[
    ("High Impact Zone", "High relevance + High resonance"),
    ("Policy Priority", "High relevance + Low resonance"),
    ("Engagement Opportunity", "Low relevance + High resonance"),
    ("Monitor Zone", "Low relevance + Low resonance"),
];

pub const MOMENTUM: &[Momentum] = &[
    Momentum { theme: "Climate Action", momentum: 0.67, change: "+23%", direction: Direction::Rising },
    Momentum { theme: "Digital Infrastructure", momentum: 0.54, change: "+18%", direction: Direction::Rising },
    Momentum { theme: "Energy Policy", momentum: 0.42, change: "+12%", direction: Direction::Rising },
    Momentum { theme: "Economic Recovery", momentum: 0.23, change: "+8%", direction: Direction::Stable },
    Momentum { theme: "Education Policy", momentum: 0.12, change: "+3%", direction: Direction::Stable },
    Momentum { theme: "Healthcare Reform", momentum: -0.15, change: "-5%", direction: Direction::Falling },
    Momentum { theme: "Housing Reform", momentum: -0.28, change: "-12%", direction: Direction::Falling },
    Momentum { theme: "Transport Policy", momentum: -0.34, change: "-15%", direction: Direction::Falling },
];

pub const PLATFORM_COMPARISON: &[PlatformBenchmark] = &[
    PlatformBenchmark { platform: "Twitter/X", volume: 456_789, sentiment: 0.23, engagement: 4.2 },
    PlatformBenchmark { platform: "Facebook", volume: 321_456, sentiment: 0.31, engagement: 3.8 },
    PlatformBenchmark { platform: "Instagram", volume: 198_765, sentiment: 0.45, engagement: 6.3 },
    PlatformBenchmark { platform: "LinkedIn", volume: 134_567, sentiment: 0.42, engagement: 2.9 },
    PlatformBenchmark { platform: "TikTok", volume: 89_234, sentiment: 0.38, engagement: 8.1 },
    PlatformBenchmark { platform: "YouTube", volume: 46_852, sentiment: 0.52, engagement: 5.7 },
];

pub const COUNTRY_BENCHMARK: &[CountryBenchmark] = &[
    CountryBenchmark { country: "United States", sentiment: 0.23, volume: 425_678 },
    CountryBenchmark { country: "United Kingdom", sentiment: 0.31, volume: 189_234 },
    CountryBenchmark { country: "Canada", sentiment: 0.42, volume: 145_632 },
    CountryBenchmark { country: "Australia", sentiment: 0.38, volume: 98_756 },
    CountryBenchmark { country: "Germany", sentiment: 0.19, volume: 167_891 },
    CountryBenchmark { country: "France", sentiment: 0.27, volume: 134_567 },
];

pub const COMPARATIVE_TRENDS: &[ComparativeTrend] = &[
    ComparativeTrend { month: "Jan", domestic: 0.23, usa: 0.19, uk: 0.28, canada: 0.35 },
    ComparativeTrend { month: "Feb", domestic: 0.31, usa: 0.22, uk: 0.31, canada: 0.38 },
    ComparativeTrend { month: "Mar", domestic: 0.28, usa: 0.25, uk: 0.29, canada: 0.41 },
    ComparativeTrend { month: "Apr", domestic: 0.34, usa: 0.21, uk: 0.33, canada: 0.39 },
    ComparativeTrend { month: "May", domestic: 0.37, usa: 0.28, uk: 0.35, canada: 0.43 },
    ComparativeTrend { month: "Jun", domestic: 0.34, usa: 0.23, uk: 0.31, canada: 0.42 },
];

// Methods & Models

pub const METHODS: &[Method] = &[
    Method {
        id: "voice",
        title: "Voice Analysis",
        description: "Actor segmentation and influence detection",
        techniques: &[
            Technique { name: "Named Entity Recognition (NER)", description: "spaCy + custom models for people, organizations, locations" },
            Technique { name: "Actor Segmentation", description: "Rule-based heuristics + machine learning classification" },
            Technique { name: "Influencer Detection", description: "Graph-based centrality measures + engagement metrics" },
            Technique { name: "Bot Detection", description: "Feature engineering + Random Forest classifier" },
        ],
        metrics: &["Share of voice", "Reach", "Engagement rate", "Credibility score"],
        visualization: "Donut charts, network graphs, geographic maps",
    },
    Method {
        id: "interpretation",
        title: "Interpretation Analysis",
        description: "Sentiment, emotion, and frame detection",
        techniques: &[
            Technique { name: "Sentiment Analysis", description: "Fine-tuned BERT/RoBERTa on government domain data" },
            Technique { name: "Emotion Classification", description: "Multi-label classification for 6 core emotions" },
            Technique { name: "Frame Detection", description: "LLM-based classification with few-shot prompting" },
            Technique { name: "Keyword Extraction", description: "TF-IDF + RAKE + domain-specific n-grams" },
        ],
        metrics: &["Sentiment polarity", "Emotion distribution", "Frame prevalence", "Keyword frequency"],
        visualization: "Stacked bars, pie charts, word clouds, trend lines",
    },
    Method {
        id: "storyline",
        title: "Storyline Analysis",
        description: "Narrative clustering and theme discovery",
        techniques: &[
            Technique { name: "Text Clustering", description: "BERTopic with UMAP dimensionality reduction" },
            Technique { name: "Theme Labeling", description: "GPT-4 based automatic labeling of clusters" },
            Technique { name: "Narrative Summarization", description: "Extractive + abstractive summarization" },
            Technique { name: "Echo Chamber Detection", description: "Community detection algorithms on user graphs" },
        ],
        metrics: &["Cluster coherence", "Theme diversity", "Echo chamber index", "Cross-platform alignment"],
        visualization: "Scatter plots, narrative cards, heatmaps, network diagrams",
    },
    Method {
        id: "trajectory",
        title: "Trajectory Analysis",
        description: "Time series forecasting and trend analysis",
        techniques: &[
            Technique { name: "Time Series Decomposition", description: "STL decomposition for trend, seasonality, residuals" },
            Technique { name: "Change Point Detection", description: "PELT algorithm for identifying sentiment shifts" },
            Technique { name: "Forecasting", description: "ARIMA + LSTM ensemble for volume/sentiment prediction" },
            Technique { name: "Event Detection", description: "Statistical outlier detection + manual annotation" },
        ],
        metrics: &["Trend direction", "Volatility", "Forecast accuracy", "Event impact"],
        visualization: "Time series charts, event annotations, forecast bands, decomposition plots",
    },
    Method {
        id: "alignment",
        title: "Alignment Analysis",
        description: "Policy relevance and vision alignment scoring",
        techniques: &[
            Technique { name: "Embedding Similarity", description: "OpenAI/Azure embeddings with cosine similarity" },
            Technique { name: "Relevance Scoring", description: "Volume × Sentiment × Similarity weighted scoring" },
            Technique { name: "Gap Analysis", description: "Public sentiment vs. policy priority comparison" },
            Technique { name: "Pillar Mapping", description: "Multi-label classification to national vision pillars" },
        ],
        metrics: &["Alignment score", "Relevance index", "Gap magnitude", "Priority ranking"],
        visualization: "Heatmaps, radar charts, scorecards, gap analysis charts",
    },
];

pub const PIPELINE_STEPS: &[PipelineStep] = &[
    PipelineStep { step: 1, title: "Data Ingestion", description: "Multi-source data collection and initial processing" },
    PipelineStep { step: 2, title: "Preprocessing", description: "Cleaning, deduplication, language detection, translation" },
    PipelineStep { step: 3, title: "Entity Recognition", description: "Extract people, organizations, locations, and metadata" },
    PipelineStep { step: 4, title: "VISTA Analytics", description: "Run Voice, Interpretation, Storyline, Trajectory, Alignment" },
    PipelineStep { step: 5, title: "Cross-cutting Analysis", description: "Meta-analyses, benchmarking, comparative studies" },
    PipelineStep { step: 6, title: "Visualization", description: "Generate dashboard components and export reports" },
];

pub const TECHNICAL_SPECS: &[SpecGroup] = &[
    SpecGroup {
        title: "Language Models",
        rows: &[
            ("Sentiment", "BERT-base"),
            ("Embeddings", "OpenAI Ada-002"),
            ("Clustering", "BERTopic"),
            ("Generation", "GPT-4"),
        ],
    },
    SpecGroup {
        title: "Processing",
        rows: &[
            ("Batch Size", "1,000 posts"),
            ("Update Frequency", "Daily"),
            ("Languages", "15+ supported"),
            ("Latency", "<5 minutes"),
        ],
    },
    SpecGroup {
        title: "Accuracy Metrics",
        rows: &[
            ("Sentiment F1", "0.87"),
            ("Entity NER F1", "0.92"),
            ("Cluster Coherence", "0.84"),
            ("Forecast MAPE", "12.3%"),
        ],
    },
];

// Export

pub const RECENT_EXPORTS: &[RecentExport] = &[
    RecentExport { name: "VISTA_Analysis_2024-03.pdf", date: "2024-03-15", size: "7.8 MB", kind: "PDF Report" },
    RecentExport { name: "Enriched_Dataset_Q1_2024.csv", date: "2024-03-10", size: "42.3 MB", kind: "CSV Data" },
    RecentExport { name: "Dashboard_Snapshot_March.html", date: "2024-03-08", size: "11.7 MB", kind: "HTML Dashboard" },
    RecentExport { name: "VISTA_Analysis_2024-02.pdf", date: "2024-02-28", size: "8.2 MB", kind: "PDF Report" },
];

pub const EXPORT_GUIDELINES: &[Guideline] = &[
    Guideline {
        title: "Data Sensitivity",
        body: "All exported data maintains anonymization and complies with data protection regulations. Personal identifiers are masked or removed.",
    },
    Guideline {
        title: "File Retention",
        body: "Exported files are stored securely for 30 days and can be re-downloaded during this period. Large datasets may require longer processing times.",
    },
    Guideline {
        title: "Usage Rights",
        body: "Exported reports are for internal government use only. Distribution outside authorized personnel requires additional approval and may have usage restrictions.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_split_sums_to_one_hundred() {
        let total = SENTIMENT.positive + SENTIMENT.negative + SENTIMENT.neutral;
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn time_series_is_chronological() {
        assert_eq!(TIME_SERIES.len(), 15);
        assert!(TIME_SERIES.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn forecast_starts_with_last_actual() {
        let first = FORECAST[0];
        assert_eq!(first.actual, TIME_SERIES.last().map(|p| p.volume));
        assert!(first.forecast.is_none());
        assert!(FORECAST[1..].iter().all(|p| p.actual.is_none() && p.forecast.is_some()));
    }

    #[test]
    fn forecast_bounds_bracket_the_forecast() {
        for point in &FORECAST[1..] {
            let (Some(f), Some(lo), Some(hi)) = (point.forecast, point.lower, point.upper) else {
                panic!("forecast point {} missing values", point.date);
            };
            assert!(lo <= f && f <= hi, "{} out of bounds", point.date);
        }
    }
}
