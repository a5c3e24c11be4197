//! Expected wiring of the controller deployed on satellite chains
//! (`ForeignController`).

use super::LimitSpec;

pub const SATELLITE_CONTROLLER: &[LimitSpec] = &[
    LimitSpec {
        limit: "LIMIT_4626_DEPOSIT",
        exists: &["setSupplyQueueMorpho", "updateWithdrawQueueMorpho", "reallocateMorpho"],
        decrease: &["depositERC4626"],
        increase: &["withdrawERC4626", "redeemERC4626"],
    },
    LimitSpec {
        limit: "LIMIT_4626_WITHDRAW",
        exists: &[],
        decrease: &["withdrawERC4626", "redeemERC4626"],
        increase: &[],
    },
    LimitSpec {
        limit: "LIMIT_AAVE_DEPOSIT",
        exists: &[],
        decrease: &["depositAave"],
        increase: &["withdrawAave"],
    },
    LimitSpec {
        limit: "LIMIT_AAVE_WITHDRAW",
        exists: &[],
        decrease: &["withdrawAave"],
        increase: &[],
    },
    LimitSpec {
        limit: "LIMIT_LAYERZERO_TRANSFER",
        exists: &[],
        decrease: &["transferTokenLayerZero"],
        increase: &[],
    },
    LimitSpec {
        limit: "LIMIT_PSM_DEPOSIT",
        exists: &[],
        decrease: &["depositPSM"],
        increase: &[],
    },
    LimitSpec {
        limit: "LIMIT_PSM_WITHDRAW",
        exists: &[],
        decrease: &["withdrawPSM"],
        increase: &[],
    },
    LimitSpec {
        limit: "LIMIT_USDC_TO_CCTP",
        exists: &[],
        decrease: &["transferUSDCToCCTP"],
        increase: &[],
    },
    LimitSpec {
        limit: "LIMIT_USDC_TO_DOMAIN",
        exists: &[],
        decrease: &["transferUSDCToCCTP"],
        increase: &[],
    },
];
