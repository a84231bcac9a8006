use rust_decimal::Decimal;

/// 单个佣金档位：推荐层级 [from, to] 区间内按 percent% 分池
#[derive(Debug, Clone, Copy)]
pub struct CommissionTier {
    pub from: u8,
    pub to: u8,
    pub percent: i64,
}

/// 档位表：1-3级15%，4-7级10%，8-10级3%
///
/// 各档位合计94%，池子按档位分完后允许留有缺口
const TIERS: &[CommissionTier] = &[
    CommissionTier { from: 1, to: 3, percent: 15 },
    CommissionTier { from: 4, to: 7, percent: 10 },
    CommissionTier { from: 8, to: 10, percent: 3 },
];

/// 佣金表：购买金额的20%进入佣金池，再按层级档位切分
#[derive(Debug, Clone)]
pub struct CommissionTable {
    pool_rate: Decimal,
    tiers: &'static [CommissionTier],
}

impl Default for CommissionTable {
    fn default() -> Self {
        Self {
            pool_rate: Decimal::new(20, 2),
            tiers: TIERS,
        }
    }
}

impl CommissionTable {
    /// 一笔购买对应的佣金池总额
    pub fn pool_for(&self, amount: Decimal) -> Decimal {
        amount * self.pool_rate
    }

    /// 某一层级的分成比例，超出档位表时为None
    pub fn rate_for(&self, level: u8) -> Option<Decimal> {
        self.tiers
            .iter()
            .find(|tier| tier.from <= level && level <= tier.to)
            .map(|tier| Decimal::new(tier.percent, 2))
    }

    /// 某一层级从池子里分到的金额
    pub fn cut_for(&self, level: u8, pool: Decimal) -> Option<Decimal> {
        self.rate_for(level).map(|rate| pool * rate)
    }

    /// 档位表覆盖的最大层级，推荐链走到这里为止
    pub fn max_depth(&self) -> u8 {
        self.tiers.iter().map(|tier| tier.to).max().unwrap_or(0)
    }
}
