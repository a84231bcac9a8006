use database::{Account, LedgerUnit};
use utils::AppResult;

/// 推荐链游标：从买家的直接推荐人起逐级上行，按需解析
///
/// 每笔购买各自新建游标，不跨购买保留任何状态。
/// 读取一律走调用方的账务单元，因此同一单元内刚写入的余额
/// 在后续层级（包括环路里重复出现的账户）再次被读到时已经生效
pub struct ReferralChain {
    cursor: Option<String>,
    level: u8,
    max_level: u8,
}

impl ReferralChain {
    /// 买家上方的推荐链，最多走 max_level 层
    pub fn above(buyer: &Account, max_level: u8) -> Self {
        Self {
            cursor: buyer.sponsor.clone(),
            level: 0,
            max_level,
        }
    }

    /// 解析下一位上级，返回其层级（从1开始）和账户
    ///
    /// 推荐人字段悬空（指向不存在的账户）时链条静默结束，不算错误
    pub async fn next(&mut self, unit: &mut dyn LedgerUnit) -> AppResult<Option<(u8, Account)>> {
        if self.level >= self.max_level {
            return Ok(None);
        }

        let address = match self.cursor.take() {
            Some(address) => address,
            None => return Ok(None),
        };

        let account = match unit.find_account(&address).await? {
            Some(account) => account,
            None => return Ok(None),
        };

        self.level += 1;
        self.cursor = account.sponsor.clone();

        Ok(Some((self.level, account)))
    }
}
