//! Expected wiring of the controller deployed on the primary chain
//! (`MainnetController`).

use super::LimitSpec;

pub const MAINNET_CONTROLLER: &[LimitSpec] = &[
    LimitSpec {
        limit: "LIMIT_4626_DEPOSIT",
        exists: &[],
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
        limit: "LIMIT_7540_DEPOSIT",
        exists: &[
            "claimDepositERC7540",
            "cancelCentrifugeDepositRequest",
            "claimCentrifugeCancelDepositRequest",
        ],
        decrease: &["requestDepositERC7540"],
        increase: &[],
    },
    LimitSpec {
        limit: "LIMIT_7540_REDEEM",
        exists: &[
            "claimRedeemERC7540",
            "cancelCentrifugeRedeemRequest",
            "claimCentrifugeCancelRedeemRequest",
        ],
        decrease: &["requestRedeemERC7540"],
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
        limit: "LIMIT_ASSET_TRANSFER",
        exists: &[],
        decrease: &["transferAsset"],
        increase: &[],
    },
    LimitSpec {
        limit: "LIMIT_CURVE_DEPOSIT",
        exists: &[],
        decrease: &["addLiquidityCurve"],
        increase: &[],
    },
    LimitSpec {
        limit: "LIMIT_CURVE_SWAP",
        exists: &[],
        decrease: &["swapCurve", "addLiquidityCurve"],
        increase: &[],
    },
    LimitSpec {
        limit: "LIMIT_CURVE_WITHDRAW",
        exists: &[],
        decrease: &["removeLiquidityCurve"],
        increase: &[],
    },
    LimitSpec {
        limit: "LIMIT_LAYERZERO_TRANSFER",
        exists: &[],
        decrease: &["transferTokenLayerZero"],
        increase: &[],
    },
    LimitSpec {
        limit: "LIMIT_MAPLE_REDEEM",
        exists: &["cancelMapleRedemption"],
        decrease: &["requestMapleRedemption"],
        increase: &[],
    },
    LimitSpec {
        limit: "LIMIT_FARM_DEPOSIT",
        exists: &[],
        decrease: &["depositToFarm"],
        increase: &[],
    },
    LimitSpec {
        limit: "LIMIT_FARM_WITHDRAW",
        exists: &[],
        decrease: &["withdrawFromFarm"],
        increase: &[],
    },
    LimitSpec {
        limit: "LIMIT_SUPERSTATE_REDEEM",
        exists: &[],
        decrease: &["redeemSuperstate"],
        increase: &[],
    },
    LimitSpec {
        limit: "LIMIT_SUPERSTATE_SUBSCRIBE",
        exists: &[],
        decrease: &["subscribeSuperstate"],
        increase: &[],
    },
    LimitSpec {
        limit: "LIMIT_SUSDE_COOLDOWN",
        exists: &[],
        decrease: &["cooldownAssetsSUSDe", "cooldownSharesSUSDe"],
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
    LimitSpec {
        limit: "LIMIT_USDE_BURN",
        exists: &[],
        decrease: &["prepareUSDeBurn"],
        increase: &[],
    },
    LimitSpec {
        limit: "LIMIT_USDE_MINT",
        exists: &[],
        decrease: &["prepareUSDeMint"],
        increase: &[],
    },
    LimitSpec {
        limit: "LIMIT_USDS_MINT",
        exists: &[],
        decrease: &["mintUSDS"],
        increase: &["burnUSDS"],
    },
    LimitSpec {
        limit: "LIMIT_USDS_TO_USDC",
        exists: &[],
        decrease: &["swapUSDSToUSDC"],
        increase: &["swapUSDCToUSDS"],
    },
];
