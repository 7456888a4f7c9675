//! The compiled-in portfolio catalog.
//!
//! Projects are static content: they are never created, mutated, or
//! destroyed at runtime. `id` is unique within the catalog and is the only
//! field used for selection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub year: String,
    pub description: String,
    pub image: String,
    pub full_description: String,
    pub technologies: Vec<String>,
    pub timeline: String,
    pub role: String,
    pub challenges: Vec<String>,
    pub results: Vec<String>,
    pub images: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// The full catalog, in display order. Display order is also the order used
/// for previous/next navigation in the detail view.
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "NEURAL_INTERFACE_V2".to_string(),
            category: "WEB3 / AI".to_string(),
            year: "2025".to_string(),
            description: "Decentralized AI platform for creative workflows".to_string(),
            image: "abstract tech neural".to_string(),
            full_description: "A groundbreaking decentralized AI platform that empowers creators \
                with privacy-first machine learning tools. Built on Web3 infrastructure to ensure \
                data sovereignty and fair compensation for AI training contributions."
                .to_string(),
            technologies: owned(&[
                "React",
                "Solidity",
                "TensorFlow.js",
                "IPFS",
                "Ethereum",
                "Next.js",
                "WebGL",
            ]),
            timeline: "6 months".to_string(),
            role: "Lead Developer & System Architect".to_string(),
            challenges: owned(&[
                "Implementing on-chain AI model verification without compromising privacy",
                "Optimizing inference performance for browser-based neural networks",
                "Creating intuitive UX for complex cryptographic operations",
                "Building scalable infrastructure for decentralized model storage",
            ]),
            results: owned(&[
                "10,000+ active users",
                "99.9% uptime",
                "50ms average inference time",
                "$2M in creator earnings",
            ]),
            images: owned(&["img1", "img2", "img3"]),
            live_url: Some("https://example.com".to_string()),
            github_url: Some("https://github.com".to_string()),
        },
        Project {
            id: 2,
            title: "DARK_MATTER_STUDIOS".to_string(),
            category: "BRAND / DIGITAL".to_string(),
            year: "2024".to_string(),
            description: "Complete brand identity for experimental music label".to_string(),
            image: "dark abstract studio".to_string(),
            full_description: "A comprehensive brand identity and digital ecosystem for an \
                avant-garde music label pushing the boundaries of experimental sound. The project \
                encompasses visual identity, web presence, and interactive audio experiences."
                .to_string(),
            technologies: owned(&[
                "Next.js",
                "Three.js",
                "Web Audio API",
                "Framer Motion",
                "Tailwind",
                "Tone.js",
            ]),
            timeline: "4 months".to_string(),
            role: "Creative Director & Frontend Lead".to_string(),
            challenges: owned(&[
                "Creating a visual system that reflects experimental audio aesthetics",
                "Building performant 3D audio visualizations for web",
                "Designing an intuitive catalog system for unconventional music formats",
                "Ensuring accessibility while maintaining artistic vision",
            ]),
            results: owned(&[
                "200% increase in engagement",
                "Featured on Awwwards",
                "15 international design awards",
                "4.9/5 user satisfaction",
            ]),
            images: owned(&["img1", "img2", "img3"]),
            live_url: Some("https://example.com".to_string()),
            github_url: None,
        },
        Project {
            id: 3,
            title: "VOID_MARKETPLACE".to_string(),
            category: "ECOMMERCE / WEB3".to_string(),
            year: "2024".to_string(),
            description: "NFT marketplace with zero-knowledge proofs".to_string(),
            image: "futuristic marketplace".to_string(),
            full_description: "A next-generation NFT marketplace leveraging zero-knowledge \
                cryptography to enable private transactions while maintaining verifiable \
                scarcity. Revolutionary approach to digital asset trading with enhanced privacy \
                guarantees."
                .to_string(),
            technologies: owned(&[
                "Solidity",
                "zk-SNARKs",
                "React",
                "ethers.js",
                "IPFS",
                "Hardhat",
                "TheGraph",
            ]),
            timeline: "8 months".to_string(),
            role: "Blockchain Architect & Smart Contract Developer".to_string(),
            challenges: owned(&[
                "Implementing zero-knowledge proofs for private NFT ownership",
                "Balancing privacy with marketplace transparency requirements",
                "Optimizing gas costs for complex cryptographic operations",
                "Creating seamless UX for advanced cryptographic features",
            ]),
            results: owned(&[
                "$50M trading volume",
                "25,000+ registered users",
                "500+ verified collections",
                "Featured in CoinDesk",
            ]),
            images: owned(&["img1", "img2", "img3", "img4"]),
            live_url: Some("https://example.com".to_string()),
            github_url: Some("https://github.com".to_string()),
        },
        Project {
            id: 4,
            title: "CIPHER_PROTOCOL".to_string(),
            category: "DEFI / INFRASTRUCTURE".to_string(),
            year: "2024".to_string(),
            description: "Privacy-first DeFi protocol and governance system".to_string(),
            image: "abstract crypto technology".to_string(),
            full_description: "An innovative DeFi protocol that brings privacy to decentralized \
                finance through advanced cryptographic techniques. Enables confidential \
                transactions while maintaining the transparency needed for trustless governance."
                .to_string(),
            technologies: owned(&[
                "Solidity",
                "Rust",
                "Circom",
                "React",
                "Substrate",
                "zk-SNARKs",
                "Web3.js",
            ]),
            timeline: "12 months".to_string(),
            role: "Protocol Designer & Core Developer".to_string(),
            challenges: owned(&[
                "Designing economic models for privacy-preserving DeFi",
                "Implementing secure multi-party computation for governance",
                "Ensuring protocol security through extensive audits",
                "Creating clear documentation for complex cryptographic systems",
            ]),
            results: owned(&[
                "$100M TVL reached",
                "Zero security incidents",
                "50+ protocol integrations",
                "DAO with 10K+ members",
            ]),
            images: owned(&["img1", "img2"]),
            live_url: Some("https://example.com".to_string()),
            github_url: Some("https://github.com".to_string()),
        },
        Project {
            id: 5,
            title: "GHOST_NETWORK".to_string(),
            category: "SOCIAL / WEB3".to_string(),
            year: "2023".to_string(),
            description: "Anonymous social platform for builders and creators".to_string(),
            image: "network abstract dark".to_string(),
            full_description: "A Web3-native social platform that enables pseudonymous \
                collaboration and content sharing. Built for creators who value privacy while \
                building reputation through verifiable achievements and contributions."
                .to_string(),
            technologies: owned(&[
                "Next.js",
                "Ceramic",
                "IPFS",
                "DID",
                "React",
                "GraphQL",
                "WebRTC",
            ]),
            timeline: "7 months".to_string(),
            role: "Full-Stack Developer & Product Lead".to_string(),
            challenges: owned(&[
                "Building reputation systems without revealing identity",
                "Implementing end-to-end encrypted messaging at scale",
                "Creating intuitive onboarding for Web3 concepts",
                "Moderating content while preserving anonymity",
            ]),
            results: owned(&[
                "50,000+ active users",
                "1M+ encrypted messages",
                "98% user retention",
                "Community-driven growth",
            ]),
            images: owned(&["img1", "img2", "img3"]),
            live_url: Some("https://example.com".to_string()),
            github_url: None,
        },
        Project {
            id: 6,
            title: "MONOLITH_FRAMEWORK".to_string(),
            category: "DEVELOPER TOOLS".to_string(),
            year: "2023".to_string(),
            description: "Open-source framework for building brutalist web apps".to_string(),
            image: "geometric monolith".to_string(),
            full_description: "An opinionated React framework and design system for building \
                bold, brutalist web applications. Combines modern developer experience with a \
                distinctive aesthetic philosophy that challenges conventional design patterns."
                .to_string(),
            technologies: owned(&[
                "React",
                "TypeScript",
                "Tailwind",
                "Vite",
                "Storybook",
                "Vitest",
                "NPM",
            ]),
            timeline: "10 months".to_string(),
            role: "Framework Author & Maintainer".to_string(),
            challenges: owned(&[
                "Creating flexible components that maintain brutalist aesthetic",
                "Building comprehensive documentation and examples",
                "Establishing community contribution guidelines",
                "Balancing opinionation with customization needs",
            ]),
            results: owned(&[
                "5,000+ GitHub stars",
                "100+ contributors",
                "500+ projects built",
                "Featured on GitHub Trending",
            ]),
            images: owned(&["img1", "img2", "img3"]),
            live_url: None,
            github_url: Some("https://github.com".to_string()),
        },
    ]
}

fn position(id: u32) -> Option<usize> {
    projects().iter().position(|p| p.id == id)
}

/// The project before `id` in catalog order, if any.
pub fn prev_before(id: u32) -> Option<Project> {
    let pos = position(id)?;
    pos.checked_sub(1).and_then(|i| projects().into_iter().nth(i))
}

/// The project after `id` in catalog order, if any.
pub fn next_after(id: u32) -> Option<Project> {
    let pos = position(id)?;
    projects().into_iter().nth(pos + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let catalog = projects();
        let ids: HashSet<u32> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn every_project_has_content() {
        for project in projects() {
            assert!(!project.title.is_empty());
            assert!(!project.images.is_empty(), "{} has no images", project.title);
            assert!(!project.challenges.is_empty());
            assert!(!project.results.is_empty());
        }
    }

    #[test]
    fn external_links_are_valid_urls() {
        for project in projects() {
            for link in [&project.live_url, &project.github_url].into_iter().flatten() {
                url::Url::parse(link).unwrap_or_else(|e| panic!("{}: {e}", project.title));
            }
        }
    }

    #[test]
    fn neighbours_follow_catalog_order() {
        let catalog = projects();
        let first = &catalog[0];
        let last = &catalog[catalog.len() - 1];

        assert_eq!(prev_before(first.id), None);
        assert_eq!(next_after(last.id), None);
        assert_eq!(next_after(first.id).map(|p| p.id), Some(catalog[1].id));
        assert_eq!(
            prev_before(catalog[1].id).map(|p| p.id),
            Some(first.id)
        );
    }

    #[test]
    fn neighbours_of_unknown_id_are_none() {
        assert_eq!(prev_before(999), None);
        assert_eq!(next_after(999), None);
    }

    #[test]
    fn project_serializes_with_camel_case_fields() {
        let catalog = projects();
        let json = serde_json::to_value(&catalog[0]).unwrap();
        assert!(json.get("fullDescription").is_some());
        assert!(json.get("liveUrl").is_some());
    }
}
