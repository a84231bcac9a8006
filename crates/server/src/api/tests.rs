use crate::{api, services::Services};
use axum::http::StatusCode;
use axum::Extension;
use axum_test::TestServer;
use database::{Account, LedgerStore, LedgerUnit};
use rust_decimal::Decimal;
use serde_json::{json, Value};

fn test_server(services: Services) -> TestServer {
    let router = api::app().layer(Extension(services));
    TestServer::new(router).expect("应该能够创建测试服务器")
}

async fn seeded(accounts: Vec<Account>) -> (TestServer, Services) {
    let services = Services::in_memory();
    services
        .store
        .create_accounts(accounts)
        .await
        .expect("应该能够创建账户");
    (test_server(services.clone()), services)
}

fn decimal_field(value: &Value) -> Decimal {
    value
        .as_str()
        .expect("金额字段应该序列化为字符串")
        .parse::<Decimal>()
        .expect("金额字段应该是合法的十进制数")
}

#[cfg(test)]
mod api_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = test_server(Services::in_memory());

        let response = server.get("/").await;
        response.assert_status(StatusCode::OK);
        response.assert_text("Server is running! 🚀");

        println!("✅ 测试通过: 健康检查正常");
    }

    #[tokio::test]
    async fn test_purchase_returns_created_with_payload() {
        let (server, _) = seeded(vec![
            Account::new("buyer", Decimal::from(1000), Some("s1".to_string())),
            Account::new("s1", Decimal::ZERO, Some("s2".to_string())),
            Account::new("s2", Decimal::ZERO, None),
        ])
        .await;

        let response = server.post("/purchase/buyer").json(&json!({ "amount": 100 })).await;
        response.assert_status(StatusCode::CREATED);

        let body: Value = response.json();
        assert_eq!(decimal_field(&body["buyerBalance"]), Decimal::from(900));
        assert_eq!(body["commissionsCreated"], 2);
        assert_eq!(body["transaction"]["receiver"], "buyer");
        assert_eq!(body["transaction"]["kind"], "buy");
        assert_eq!(decimal_field(&body["transaction"]["amount"]), Decimal::from(-100));
        assert!(body["message"].as_str().unwrap().contains("Purchase completed"));

        // 两级上级也在同一笔里得到贷记
        let s1 = server.get("/account/s1").await;
        s1.assert_status(StatusCode::OK);
        let s1_body: Value = s1.json();
        assert_eq!(decimal_field(&s1_body["balance"]), Decimal::from(3));

        println!("✅ 测试通过: 购买接口返回201和完整结果");
    }

    #[tokio::test]
    async fn test_purchase_rejects_non_positive_amount() {
        let (server, services) = seeded(vec![Account::new("buyer", Decimal::from(1000), None)]).await;

        let response = server.post("/purchase/buyer").json(&json!({ "amount": 0 })).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert!(body["errors"]["message"].is_array());

        // 拒绝发生在开启账务单元之前，余额不变
        let buyer = services.store.get_account("buyer").await.unwrap().expect("买家应该存在");
        assert_eq!(buyer.balance, Decimal::from(1000));

        println!("✅ 测试通过: 非正金额返回400且不触库");
    }

    #[tokio::test]
    async fn test_purchase_rejects_non_numeric_amount() {
        let (server, _) = seeded(vec![Account::new("buyer", Decimal::from(1000), None)]).await;

        let response = server.post("/purchase/buyer").json(&json!({ "amount": "abc" })).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        println!("✅ 测试通过: 非数值金额返回400");
    }

    #[tokio::test]
    async fn test_purchase_for_unknown_buyer_is_server_error() {
        let (server, _) = seeded(vec![Account::new("someone", Decimal::from(10), None)]).await;

        let response = server.post("/purchase/ghost").json(&json!({ "amount": 5 })).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        println!("✅ 测试通过: 买家不存在按服务器错误返回");
    }

    #[tokio::test]
    async fn test_purchase_with_insufficient_balance_is_server_error() {
        let (server, services) = seeded(vec![Account::new("buyer", Decimal::from(50), None)]).await;

        let response = server.post("/purchase/buyer").json(&json!({ "amount": 100 })).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let buyer = services.store.get_account("buyer").await.unwrap().expect("买家应该存在");
        assert_eq!(buyer.balance, Decimal::from(50));

        println!("✅ 测试通过: 余额不足按服务器错误返回且余额不变");
    }

    #[tokio::test]
    async fn test_history_projection_shape_and_window() {
        let (server, services) = seeded(vec![Account::new("trader", Decimal::from(1000), None)]).await;

        // 直接通过账本写入6笔交易，时间依次递增
        let mut unit = services.store.begin().await.expect("应该能够开启账务单元");
        for i in 0..6i64 {
            let mut transaction = database::Transaction::buy("trader", Decimal::from(10 + i));
            transaction.created_at = 1_700_000_000_000 + i;
            unit.insert_transaction(&transaction).await.expect("应该能够写入交易");
        }
        unit.commit().await.expect("应该能够提交账务单元");

        let response = server.get("/history/trader").await;
        response.assert_status(StatusCode::OK);

        let body: Value = response.json();
        let items = body.as_array().expect("历史应该是数组");
        assert_eq!(items.len(), 4);

        // 投影只含 type / amount / createdAt 三个字段
        let first = items[0].as_object().expect("历史条目应该是对象");
        assert_eq!(first.len(), 3);
        assert_eq!(first["type"], "buy");
        assert_eq!(first["createdAt"], 1_700_000_000_005i64);
        assert_eq!(decimal_field(&first["amount"]), Decimal::from(-15));

        // 从新到旧排列
        assert_eq!(items[3]["createdAt"], 1_700_000_000_002i64);

        println!("✅ 测试通过: 历史接口投影和窗口正确");
    }

    #[tokio::test]
    async fn test_history_for_unknown_address_is_empty_list() {
        let (server, _) = seeded(vec![Account::new("someone", Decimal::from(10), None)]).await;

        let response = server.get("/history/nobody").await;
        response.assert_status(StatusCode::OK);

        let body: Value = response.json();
        assert_eq!(body.as_array().expect("历史应该是数组").len(), 0);

        println!("✅ 测试通过: 未知地址的历史为空数组");
    }

    #[tokio::test]
    async fn test_commissions_listed_by_receiver() {
        let (server, _) = seeded(vec![
            Account::new("buyer", Decimal::from(1000), Some("s1".to_string())),
            Account::new("s1", Decimal::ZERO, None),
        ])
        .await;

        server
            .post("/purchase/buyer")
            .json(&json!({ "amount": 100 }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server.get("/history/commissions/s1").await;
        response.assert_status(StatusCode::OK);

        let body: Value = response.json();
        let items = body.as_array().expect("佣金应该是数组");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["sender"], "buyer");
        assert_eq!(items[0]["receiver"], "s1");
        assert_eq!(items[0]["level"], 1);
        assert_eq!(decimal_field(&items[0]["amount"]), Decimal::from(3));

        println!("✅ 测试通过: 按收款地址列出佣金");
    }

    #[tokio::test]
    async fn test_account_lookup_and_missing_account() {
        let (server, _) = seeded(vec![Account::new("known", Decimal::from(42), None)]).await;

        let response = server.get("/account/known").await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["address"], "known");
        assert_eq!(decimal_field(&body["balance"]), Decimal::from(42));

        let missing = server.get("/account/ghost").await;
        missing.assert_status(StatusCode::NOT_FOUND);

        println!("✅ 测试通过: 账户查询与404");
    }

    #[tokio::test]
    async fn test_mock_accounts_skips_existing_and_conflicts_when_all_exist() {
        let (server, _) = seeded(vec![Account::new("existing", Decimal::from(1), None)]).await;

        let response = server
            .post("/account/mock_accounts")
            .json(&json!({
                "accounts": [
                    Account::new("existing", Decimal::from(1), None),
                    Account::new("fresh", Decimal::from(5), None),
                ]
            }))
            .await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["created"], 1);

        // 全部已存在时返回409
        let conflict = server
            .post("/account/mock_accounts")
            .json(&json!({
                "accounts": [Account::new("fresh", Decimal::from(5), None)]
            }))
            .await;
        conflict.assert_status(StatusCode::CONFLICT);

        println!("✅ 测试通过: 批量建账跳过已有地址并以409拒绝全量重复");
    }
}
