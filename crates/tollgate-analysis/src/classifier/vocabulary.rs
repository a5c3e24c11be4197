//! The closed vocabulary of guard modifiers and helper calls, and the
//! priority order in which call-chain names are matched.

use tollgate_core::types::UsageKind;

/// Modifiers that guard a function with a rate limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardModifier {
    RateLimited,
    RateLimitedAsset,
    RateLimitExists,
}

impl GuardModifier {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rateLimited" => Some(Self::RateLimited),
            "rateLimitedAsset" => Some(Self::RateLimitedAsset),
            "rateLimitExists" => Some(Self::RateLimitExists),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::RateLimited => "rateLimited",
            Self::RateLimitedAsset => "rateLimitedAsset",
            Self::RateLimitExists => "rateLimitExists",
        }
    }

    pub fn usage(self) -> UsageKind {
        match self {
            Self::RateLimited | Self::RateLimitedAsset => UsageKind::Decrease,
            Self::RateLimitExists => UsageKind::Exists,
        }
    }
}

/// Helper functions whose presence in a reference's call chain determines
/// its usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelperCall {
    TriggerRateLimitDecrease,
    TriggerRateLimitIncrease,
    RateLimited,
    RateLimitedAsset,
    CancelRateLimit,
    RateLimitExists,
    AddLiquidity,
    Swap,
    RemoveLiquidity,
    TransferUsdcToCctp,
    TransferSwapUsdsToUsdc,
    SwapUsdsToUsdc,
    SwapUsdcToUsds,
}

/// Match order for call chains: the first helper present in the chain wins.
pub const CALL_PRIORITY: [HelperCall; 13] = [
    HelperCall::TriggerRateLimitDecrease,
    HelperCall::TriggerRateLimitIncrease,
    HelperCall::RateLimited,
    HelperCall::RateLimitedAsset,
    HelperCall::CancelRateLimit,
    HelperCall::RateLimitExists,
    HelperCall::AddLiquidity,
    HelperCall::Swap,
    HelperCall::RemoveLiquidity,
    HelperCall::TransferUsdcToCctp,
    HelperCall::TransferSwapUsdsToUsdc,
    HelperCall::SwapUsdsToUsdc,
    HelperCall::SwapUsdcToUsds,
];

impl HelperCall {
    pub fn name(self) -> &'static str {
        match self {
            Self::TriggerRateLimitDecrease => "triggerRateLimitDecrease",
            Self::TriggerRateLimitIncrease => "triggerRateLimitIncrease",
            Self::RateLimited => "_rateLimited",
            Self::RateLimitedAsset => "_rateLimitedAsset",
            Self::CancelRateLimit => "_cancelRateLimit",
            Self::RateLimitExists => "_rateLimitExists",
            Self::AddLiquidity => "addLiquidity",
            Self::Swap => "swap",
            Self::RemoveLiquidity => "removeLiquidity",
            Self::TransferUsdcToCctp => "transferUSDCToCCTP",
            Self::TransferSwapUsdsToUsdc => "transferswapUSDSToUSDC",
            Self::SwapUsdsToUsdc => "swapUSDSToUSDC",
            Self::SwapUsdcToUsds => "swapUSDCToUSDS",
        }
    }

    pub fn usage(self) -> UsageKind {
        match self {
            Self::TriggerRateLimitIncrease | Self::CancelRateLimit | Self::SwapUsdcToUsds => {
                UsageKind::Increase
            }
            Self::RateLimitExists => UsageKind::Exists,
            Self::TriggerRateLimitDecrease
            | Self::RateLimited
            | Self::RateLimitedAsset
            | Self::AddLiquidity
            | Self::Swap
            | Self::RemoveLiquidity
            | Self::TransferUsdcToCctp
            | Self::TransferSwapUsdsToUsdc
            | Self::SwapUsdsToUsdc => UsageKind::Decrease,
        }
    }
}

/// Highest-priority helper present in `chain`, if any.
pub fn match_call_chain(chain: &[&str]) -> Option<HelperCall> {
    CALL_PRIORITY
        .into_iter()
        .find(|helper| chain.contains(&helper.name()))
}
