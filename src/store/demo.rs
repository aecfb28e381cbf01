//! Bundled demo snapshot.
//!
//! A small, fixed dataset standing in for a real data source: eight
//! leaderboard miners, eight mined blocks, four registered items, and one
//! seeded transfer. Used by tests and by downstream demos until a real
//! snapshot file is wired up.

use crate::domain::{Block, Item, ItemStatus, Miner, TransferEvent, TransferStatus};
use crate::store::snapshot::Snapshot;
use serde_json::json;
use std::collections::BTreeMap;

/// Returns the bundled demo snapshot.
///
/// The data is fixed and deterministic; ranks are pre-assigned consistently
/// with descending score order.
#[must_use]
pub fn demo_snapshot() -> Snapshot {
    Snapshot {
        items: demo_items(),
        blocks: demo_blocks(),
        miners: demo_miners(),
        history: demo_history(),
        ..Snapshot::default()
    }
}

fn demo_miners() -> Vec<Miner> {
    let seed: [(&str, &str, i64); 8] = [
        ("CryptoMiner_Pro", "0x1234567890abcdef1234567890abcdef12345678", 15420),
        ("BlockDigger", "0xabcdef1234567890abcdef1234567890abcdef12", 12890),
        ("HashHunter", "0x9876543210fedcba9876543210fedcba98765432", 11750),
        ("MiningMachine", "0xfedcba0987654321fedcba0987654321fedcba09", 9680),
        ("DigitalProspector", "0x5555666677778888999900001111222233334444", 8920),
        ("ChainWorker", "0x1111222233334444555566667777888899990000", 7750),
        ("CryptoCrusher", "0x0000111122223333444455556666777788889999", 6890),
        ("BlockBuster", "0xaaaaaabbbbbbccccccddddddeeeeeeffffffffff", 5640),
    ];

    seed.into_iter()
        .enumerate()
        .map(|(index, (name, address, score))| Miner {
            rank: u32::try_from(index).unwrap_or(u32::MAX) + 1,
            name: name.to_string(),
            address: address.to_string(),
            score,
        })
        .collect()
}

fn demo_blocks() -> Vec<Block> {
    vec![
        Block::new("BLK_001", "CryptoMiner_Pro", 156, 1_705_329_138),
        Block::new("BLK_002", "BlockDigger", 142, 1_705_328_925),
        Block::new("BLK_003", "HashHunter", 139, 1_705_328_712),
        Block::new("BLK_004", "MiningMachine", 134, 1_705_328_493),
        Block::new("BLK_005", "DigitalProspector", 128, 1_705_328_287),
        Block::new("BLK_006", "ChainWorker", 125, 1_705_328_092),
        Block::new("BLK_007", "CryptoCrusher", 122, 1_705_327_889),
        Block::new("BLK_008", "BlockBuster", 119, 1_705_327_694),
    ]
}

fn demo_items() -> Vec<Item> {
    let art_metadata: BTreeMap<String, serde_json::Value> = [
        ("category".to_string(), json!("digital-art")),
        ("creator".to_string(), json!("artist-name")),
        ("edition".to_string(), json!(1)),
        ("totalSupply".to_string(), json!(1)),
    ]
    .into_iter()
    .collect();

    vec![
        Item {
            id: "1".to_string(),
            name: "Digital Art Piece #001".to_string(),
            description: "A unique digital artwork created by renowned artist featuring \
                          abstract geometric patterns with vibrant colors."
                .to_string(),
            owner: "0x1234567890abcdef1234567890abcdef12345678".to_string(),
            creator: "0xabcdef1234567890abcdef1234567890abcdef12".to_string(),
            created_at: 1_705_314_600,
            status: ItemStatus::Active,
            metadata: art_metadata,
            tx_hash: "0x9876543210fedcba9876543210fedcba9876543210fedcba9876543210fedcba"
                .to_string(),
        },
        Item {
            id: "2".to_string(),
            name: "Smart Contract License".to_string(),
            description: "License for commercial smart contract usage".to_string(),
            owner: "0x9876543210fedcba9876543210fedcba98765432".to_string(),
            creator: "0x1111222233334444555566667777888899990000".to_string(),
            created_at: 1_705_228_200,
            status: ItemStatus::Transferred,
            metadata: BTreeMap::new(),
            tx_hash: "0x2222222222222222222222222222222222222222222222222222222222222222"
                .to_string(),
        },
        Item {
            id: "3".to_string(),
            name: "NFT Collection Item".to_string(),
            description: "Part of exclusive NFT collection series".to_string(),
            owner: "0xfedcba0987654321fedcba0987654321fedcba09".to_string(),
            creator: "0xfedcba0987654321fedcba0987654321fedcba09".to_string(),
            created_at: 1_705_141_800,
            status: ItemStatus::Pending,
            metadata: BTreeMap::new(),
            tx_hash: "0x3333333333333333333333333333333333333333333333333333333333333333"
                .to_string(),
        },
        Item {
            id: "4".to_string(),
            name: "Domain Name Rights".to_string(),
            description: "Ownership rights for premium domain name".to_string(),
            owner: "0x5555666677778888999900001111222233334444".to_string(),
            creator: "0x5555666677778888999900001111222233334444".to_string(),
            created_at: 1_705_055_400,
            status: ItemStatus::Active,
            metadata: BTreeMap::new(),
            tx_hash: "0x4444444444444444444444444444444444444444444444444444444444444444"
                .to_string(),
        },
    ]
}

fn demo_history() -> BTreeMap<String, Vec<TransferEvent>> {
    let mut history = BTreeMap::new();
    history.insert(
        "1".to_string(),
        vec![TransferEvent {
            id: "1".to_string(),
            from_owner: "0xabcdef1234567890abcdef1234567890abcdef12".to_string(),
            to_owner: "0x1234567890abcdef1234567890abcdef12345678".to_string(),
            timestamp: 1_705_314_600,
            tx_hash: "0x1111111111111111111111111111111111111111111111111111111111111111"
                .to_string(),
            status: TransferStatus::Completed,
        }],
    );
    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate_address;
    use crate::store::recompute_ranks;

    #[test]
    fn demo_addresses_are_well_formed() {
        let snapshot = demo_snapshot();
        for miner in &snapshot.miners {
            assert!(validate_address(&miner.address).is_ok(), "{}", miner.name);
        }
        for item in &snapshot.items {
            assert!(validate_address(&item.owner).is_ok(), "{}", item.id);
            assert!(validate_address(&item.creator).is_ok(), "{}", item.id);
        }
    }

    #[test]
    fn demo_ranks_match_recomputation() {
        let snapshot = demo_snapshot();
        let mut recomputed = snapshot.miners.clone();
        recompute_ranks(&mut recomputed);
        assert_eq!(recomputed, snapshot.miners);
    }

    #[test]
    fn seeded_history_keeps_the_causal_chain() {
        let snapshot = demo_snapshot();
        let item = snapshot.items.iter().find(|i| i.id == "1").unwrap();
        let history = snapshot.history_for("1");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].to_owner, item.owner);
        assert_eq!(history[0].from_owner, item.creator);
    }

    #[test]
    fn blocks_are_ordered_by_submission_time() {
        let snapshot = demo_snapshot();
        // The explorer renders genesis-first, so timestamps descend from the
        // newest submission.
        for pair in snapshot.blocks.windows(2) {
            assert!(pair[0].timestamp > pair[1].timestamp);
        }
    }
}
