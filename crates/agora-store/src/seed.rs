//! Sample content: six debates and the leaderboard, matching the datasets
//! the product demos ship with. Real deployments load the same shapes from
//! the REST backend instead.

use agora_core::{
    ArgumentEdge, ArgumentId, ArgumentKind, ArgumentNode, DebateGraph, DebateId, DebateStatus,
    DebateSummary, LeaderboardEntry, RelationKind,
};

fn node(
    id: &str,
    label: &str,
    kind: ArgumentKind,
    author: &str,
    group: i32,
    val: f32,
    rating: f32,
) -> ArgumentNode {
    ArgumentNode {
        id: ArgumentId::from(id),
        label: label.to_string(),
        kind,
        author: author.to_string(),
        group,
        val,
        rating,
    }
}

fn edge(source: &str, target: &str, relation: RelationKind) -> ArgumentEdge {
    ArgumentEdge {
        source: ArgumentId::from(source),
        target: ArgumentId::from(target),
        relation,
    }
}

#[allow(clippy::too_many_arguments)]
fn summary(
    id: &str,
    title: &str,
    category: &str,
    creator: &str,
    status: DebateStatus,
    argument_count: u32,
    participant_count: u32,
    avg_reputation: u32,
    last_active: &str,
) -> DebateSummary {
    DebateSummary {
        id: DebateId::from(id),
        title: title.to_string(),
        category: category.to_string(),
        creator: creator.to_string(),
        status,
        argument_count,
        participant_count,
        avg_reputation,
        last_active: last_active.to_string(),
    }
}

fn graph(id: &str, nodes: Vec<ArgumentNode>, edges: Vec<ArgumentEdge>) -> DebateGraph {
    DebateGraph {
        debate_id: DebateId::from(id),
        nodes,
        edges,
    }
}

pub fn debates() -> Vec<(DebateSummary, DebateGraph)> {
    use ArgumentKind::{EVIDENCE, REFUTE, RESOLUTION, SUPPORT};
    use RelationKind::{PROVES, REFUTES, SUPPORTS};

    vec![
        (
            summary(
                "1",
                "Should AI-generated content require a mandatory digital watermark?",
                "Technology",
                "TechEthicist",
                DebateStatus::Hot,
                42,
                18,
                89,
                "2h ago",
            ),
            graph(
                "1",
                vec![
                    node(
                        "root",
                        "Should AI-generated content require a mandatory digital watermark?",
                        RESOLUTION,
                        "TechEthicist",
                        1,
                        30.0,
                        4.5,
                    ),
                    node(
                        "a1",
                        "Essential for preserving copyright and intellectual property",
                        SUPPORT,
                        "CriticalThinker",
                        2,
                        20.0,
                        4.2,
                    ),
                    node(
                        "a2",
                        "Prevents misinformation at scale",
                        SUPPORT,
                        "IssueAdvocate",
                        2,
                        22.0,
                        4.7,
                    ),
                    node(
                        "r1",
                        "Watermarks are easily bypassed by hackers",
                        REFUTE,
                        "TechExpert",
                        3,
                        18.0,
                        3.9,
                    ),
                    node(
                        "r2",
                        "Inhibits open-source AI development",
                        REFUTE,
                        "Student_99",
                        3,
                        15.0,
                        3.5,
                    ),
                    node(
                        "e1",
                        "Study: 90% of pixels can be modified without losing ID",
                        EVIDENCE,
                        "Researcher",
                        2,
                        12.0,
                        4.8,
                    ),
                ],
                vec![
                    edge("a1", "root", SUPPORTS),
                    edge("a2", "root", SUPPORTS),
                    edge("r1", "a2", REFUTES),
                    edge("r2", "root", REFUTES),
                    edge("e1", "a1", PROVES),
                ],
            ),
        ),
        (
            summary(
                "2",
                "Should cryptocurrencies be classified as securities?",
                "Economics",
                "FinanceGuru",
                DebateStatus::Active,
                67,
                24,
                92,
                "4h ago",
            ),
            graph(
                "2",
                vec![
                    node(
                        "root",
                        "Should cryptocurrencies be classified as securities?",
                        RESOLUTION,
                        "FinanceGuru",
                        1,
                        30.0,
                        4.3,
                    ),
                    node(
                        "a1",
                        "Most crypto tokens function like investment contracts",
                        SUPPORT,
                        "LegalExpert",
                        2,
                        20.0,
                        4.1,
                    ),
                    node(
                        "a2",
                        "Investor protection requires SEC oversight",
                        SUPPORT,
                        "PolicyMaker",
                        2,
                        18.0,
                        4.4,
                    ),
                    node(
                        "r1",
                        "Decentralized nature makes traditional regulation impossible",
                        REFUTE,
                        "CryptoAdvocate",
                        3,
                        22.0,
                        3.8,
                    ),
                    node(
                        "r2",
                        "Innovation requires regulatory flexibility",
                        REFUTE,
                        "TechInnovator",
                        3,
                        16.0,
                        3.6,
                    ),
                ],
                vec![
                    edge("a1", "root", SUPPORTS),
                    edge("a2", "root", SUPPORTS),
                    edge("r1", "root", REFUTES),
                    edge("r2", "a2", REFUTES),
                ],
            ),
        ),
        (
            summary(
                "3",
                "Is universal basic income economically viable?",
                "Policy",
                "PolicyAnalyst",
                DebateStatus::Hot,
                89,
                31,
                85,
                "1h ago",
            ),
            graph(
                "3",
                vec![
                    node(
                        "root",
                        "Is universal basic income economically viable?",
                        RESOLUTION,
                        "PolicyAnalyst",
                        1,
                        30.0,
                        4.6,
                    ),
                    node(
                        "a1",
                        "Reduces poverty and inequality effectively",
                        SUPPORT,
                        "SocialWorker",
                        2,
                        20.0,
                        4.3,
                    ),
                    node(
                        "a2",
                        "Simplifies welfare system administration",
                        SUPPORT,
                        "EconStudent",
                        2,
                        18.0,
                        4.0,
                    ),
                    node(
                        "r1",
                        "Massive fiscal burden on government budgets",
                        REFUTE,
                        "FiscalConservative",
                        3,
                        24.0,
                        4.1,
                    ),
                    node(
                        "r2",
                        "May reduce work incentives and productivity",
                        REFUTE,
                        "LaborEconomist",
                        3,
                        19.0,
                        3.9,
                    ),
                ],
                vec![
                    edge("a1", "root", SUPPORTS),
                    edge("a2", "root", SUPPORTS),
                    edge("r1", "root", REFUTES),
                    edge("r2", "root", REFUTES),
                ],
            ),
        ),
        (
            summary(
                "4",
                "Should social media platforms be held liable for user content?",
                "Law",
                "LegalScholar",
                DebateStatus::New,
                54,
                22,
                88,
                "30m ago",
            ),
            graph(
                "4",
                vec![
                    node(
                        "root",
                        "Should social media platforms be held liable for user content?",
                        RESOLUTION,
                        "LegalScholar",
                        1,
                        30.0,
                        4.4,
                    ),
                    node(
                        "a1",
                        "Platforms profit from harmful content engagement",
                        SUPPORT,
                        "MediaCritic",
                        2,
                        20.0,
                        4.2,
                    ),
                    node(
                        "a2",
                        "Current Section 230 protections are outdated",
                        SUPPORT,
                        "PolicyReformer",
                        2,
                        18.0,
                        4.0,
                    ),
                    node(
                        "r1",
                        "Would destroy free speech and innovation",
                        REFUTE,
                        "TechLibertarian",
                        3,
                        22.0,
                        3.7,
                    ),
                    node(
                        "r2",
                        "Impossible to moderate billions of posts effectively",
                        REFUTE,
                        "PlatformEngineer",
                        3,
                        19.0,
                        4.1,
                    ),
                ],
                vec![
                    edge("a1", "root", SUPPORTS),
                    edge("a2", "root", SUPPORTS),
                    edge("r1", "root", REFUTES),
                    edge("r2", "a1", REFUTES),
                ],
            ),
        ),
        (
            summary(
                "5",
                "Does remote work improve overall productivity?",
                "Business",
                "WorkCulturePro",
                DebateStatus::Active,
                38,
                15,
                81,
                "5h ago",
            ),
            graph(
                "5",
                vec![
                    node(
                        "root",
                        "Does remote work improve overall productivity?",
                        RESOLUTION,
                        "WorkCulturePro",
                        1,
                        30.0,
                        4.2,
                    ),
                    node(
                        "a1",
                        "Eliminates commute time and office distractions",
                        SUPPORT,
                        "RemoteWorker",
                        2,
                        20.0,
                        4.3,
                    ),
                    node(
                        "a2",
                        "Allows for better work-life balance",
                        SUPPORT,
                        "HRSpecialist",
                        2,
                        18.0,
                        4.1,
                    ),
                    node(
                        "r1",
                        "Collaboration and creativity suffer without in-person interaction",
                        REFUTE,
                        "TeamManager",
                        3,
                        21.0,
                        3.9,
                    ),
                    node(
                        "r2",
                        "Home distractions reduce focus and efficiency",
                        REFUTE,
                        "ProductivityExpert",
                        3,
                        17.0,
                        3.8,
                    ),
                ],
                vec![
                    edge("a1", "root", SUPPORTS),
                    edge("a2", "root", SUPPORTS),
                    edge("r1", "root", REFUTES),
                    edge("r2", "root", REFUTES),
                ],
            ),
        ),
        (
            summary(
                "6",
                "Should gene editing be allowed for human enhancement?",
                "Ethics",
                "BioethicsExpert",
                DebateStatus::Hot,
                73,
                28,
                94,
                "3h ago",
            ),
            graph(
                "6",
                vec![
                    node(
                        "root",
                        "Should gene editing be allowed for human enhancement?",
                        RESOLUTION,
                        "BioethicsExpert",
                        1,
                        30.0,
                        4.7,
                    ),
                    node(
                        "a1",
                        "Could eliminate genetic diseases and suffering",
                        SUPPORT,
                        "GeneticResearcher",
                        2,
                        22.0,
                        4.5,
                    ),
                    node(
                        "a2",
                        "Enhances human potential and capabilities",
                        SUPPORT,
                        "Transhumanist",
                        2,
                        19.0,
                        4.2,
                    ),
                    node(
                        "r1",
                        "Creates inequality between enhanced and natural humans",
                        REFUTE,
                        "SocialJusticeAdvocate",
                        3,
                        24.0,
                        4.3,
                    ),
                    node(
                        "r2",
                        "Unknown long-term consequences for human species",
                        REFUTE,
                        "CautiousScientist",
                        3,
                        20.0,
                        4.4,
                    ),
                    node(
                        "e1",
                        "CRISPR trials show 95% success rate in disease prevention",
                        EVIDENCE,
                        "ClinicalTrialLead",
                        2,
                        14.0,
                        4.8,
                    ),
                ],
                vec![
                    edge("a1", "root", SUPPORTS),
                    edge("a2", "root", SUPPORTS),
                    edge("r1", "root", REFUTES),
                    edge("r2", "root", REFUTES),
                    edge("e1", "a1", PROVES),
                ],
            ),
        ),
    ]
}

pub fn leaderboard() -> Vec<LeaderboardEntry> {
    let entry = |rank: u32, username: &str, reputation: i64, debates_won: u32, avg_rating: f32, trend: &str| {
        LeaderboardEntry {
            rank,
            username: username.to_string(),
            reputation,
            debates_won,
            avg_rating,
            trend: trend.to_string(),
        }
    };
    vec![
        entry(1, "LogicMaster", 3847, 23, 4.9, "+12%"),
        entry(2, "CriticalThinker", 2941, 18, 4.7, "+8%"),
        entry(3, "DebateChampion", 2654, 15, 4.8, "+15%"),
        entry(4, "PolicyExpert", 2387, 21, 4.6, "+5%"),
        entry(5, "TechEthicist", 2156, 14, 4.7, "+10%"),
        entry(6, "PhilosopherKing", 1923, 12, 4.5, "+7%"),
        entry(7, "ScienceAdvocate", 1847, 16, 4.6, "+9%"),
        entry(8, "LegalScholar", 1765, 11, 4.4, "+6%"),
        entry(9, "EconomicsGuru", 1642, 13, 4.5, "+11%"),
        entry(10, "DataAnalyst", 1534, 10, 4.3, "+4%"),
    ]
}
