// SPDX-FileCopyrightText: 2026 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

#[cfg(test)]
mod payments_tests {
    use crate::common::{DenarConfig, Error};
    use crate::payments::{
        ApiErrorType, Card, Currency, Customer, CustomerInput, PaymentSource, PaymentsClient,
        Source,
    };
    use crate::unix_time::{NonZeroUnixSeconds, UnixTime};
    use hyper::StatusCode;
    use serde_json::json;
    use std::collections::HashMap;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(endpoint: &str) -> DenarConfig {
        DenarConfig::builder()
            .toml_str(&format!(
                r#"
                    [payments]
                    secret_key = "sk_test_0000000000000000000000000000"
                    endpoint = "{endpoint}"
                "#
            ))
            .debug(true)
            .build()
            .expect("payments.toml")
    }

    fn customer_json() -> serde_json::Value {
        json!({
            "id": "cus_123",
            "object": "customer",
            "account_balance": -2500,
            "created": 1609459200,
            "currency": "usd",
            "default_source": "card_1",
            "delinquent": false,
            "description": "Test customer",
            "discount": null,
            "email": "mr.ed@example.com",
            "livemode": false,
            "metadata": {"tier": "gold"},
            "shipping": {
                "address": {
                    "city": "Portland",
                    "country": "US",
                    "line1": "123 First Ave",
                    "line2": null,
                    "postal_code": "97201",
                    "state": "OR"
                },
                "name": "Mr. Ed",
                "phone": "2065551212"
            },
            "sources": {
                "data": [{
                    "object": "card",
                    "id": "card_1",
                    "brand": "Visa",
                    "exp_month": 12,
                    "exp_year": 2025,
                    "funding": "credit",
                    "last4": "4242"
                }],
                "has_more": false,
                "total_count": 1,
                "url": "/v1/customers/cus_123/sources"
            },
            "subscriptions": []
        })
    }

    #[test]
    fn customer_decode_and_encode_round_trip() {
        let customer = Customer::from_json(customer_json()).expect("customer fixture");
        assert_eq!(customer.id.as_str(), "cus_123");
        assert_eq!(customer.account_balance, -2500);
        assert_eq!(customer.created.seconds(), 1609459200);
        assert_eq!(
            customer.created.format("%Y-%m-%dT%H:%M:%SZ"),
            "2021-01-01T00:00:00Z"
        );
        assert_eq!(customer.currency, Currency::USD);
        assert!(customer.discount.is_none());
        assert_eq!(customer.sources.data.len(), 1);
        match &customer.sources.data[0] {
            PaymentSource::Card(card) => assert_eq!(card.last4, "4242"),
            other => panic!("expected stored card: {other:?}"),
        }

        let encoded = serde_json::to_value(&customer).expect("encode");
        assert_eq!(encoded.get("object"), Some(&json!("customer")));
        assert_eq!(encoded.get("created"), Some(&json!(1609459200)));
        // Absent optionals encode as null rather than being omitted.
        assert_eq!(encoded.get("discount"), Some(&json!(null)));
        assert_eq!(encoded.get("metadata"), Some(&json!({"tier": "gold"})));
        assert_eq!(Customer::from_json(encoded).expect("re-decode"), customer);
    }

    #[test]
    fn customer_metadata_absent_and_empty_normalize() {
        let mut absent = customer_json();
        absent.as_object_mut().unwrap().remove("metadata");
        let mut empty = customer_json();
        empty["metadata"] = json!({});

        let from_absent = Customer::from_json(absent).expect("absent metadata");
        let from_empty = Customer::from_json(empty).expect("empty metadata");
        assert!(from_absent.metadata.is_empty());
        assert_eq!(from_absent.metadata, from_empty.metadata);

        // Encode always emits the key, possibly as an empty map.
        let encoded = serde_json::to_value(&from_absent).expect("encode");
        assert_eq!(encoded.get("metadata"), Some(&json!({})));
    }

    #[test]
    fn customer_decode_reports_missing_fields() {
        let mut json = customer_json();
        json.as_object_mut().unwrap().remove("id");
        let errors = Customer::from_json(json).expect_err("missing id");
        assert!(errors[0].contains("missing field `id`"), "{errors:?}");

        let mut json = customer_json();
        json["created"] = json!("not a timestamp");
        let errors = Customer::from_json(json).expect_err("bad created");
        assert!(errors[0].contains("invalid type"), "{errors:?}");
    }

    #[test]
    fn source_token_decodes_from_bare_string() {
        let source: Source = serde_json::from_value(json!("tok_123")).expect("token");
        assert_eq!(source, Source::Token("tok_123".to_string()));
    }

    #[test]
    fn source_card_decodes_from_object() {
        let source: Source = serde_json::from_value(json!({
            "exp_month": 12,
            "exp_year": 2025,
            "number": "4242424242424242"
        }))
        .expect("card");
        match source {
            Source::Card(card) => {
                assert_eq!(card.exp_month, 12);
                assert_eq!(card.exp_year, 2025);
                assert_eq!(card.number, "4242424242424242");
                assert!(card.address_city.is_none());
                assert!(card.currency.is_none());
                assert!(card.metadata.is_empty());
                assert!(card.name.is_none());
            }
            other => panic!("expected card: {other:?}"),
        }
    }

    #[test]
    fn source_rejects_other_shapes() {
        for value in [json!(42), json!(["tok_123"])] {
            let e = serde_json::from_value::<Source>(value).expect_err("bad shape");
            assert!(e.to_string().contains("InvalidSource"), "{e}");
        }
    }

    #[test]
    fn source_encodes_by_variant() {
        let token = Source::Token("tok_abc".to_string());
        assert_eq!(serde_json::to_value(&token).unwrap(), json!("tok_abc"));

        let card = Source::Card(Card::new(12, 2025, "4242424242424242"));
        let encoded = serde_json::to_value(&card).unwrap();
        assert_eq!(encoded.get("object"), Some(&json!("card")));
        assert_eq!(encoded.get("number"), Some(&json!("4242424242424242")));
        assert_eq!(encoded.get("cvc"), Some(&json!(null)));
    }

    #[test]
    fn token_form_parameters_are_exact() {
        let input = CustomerInput {
            account_balance: 0,
            metadata: HashMap::from([("k".to_string(), "v".to_string())]),
            source: Some(Source::Token("tok_abc".to_string())),
            ..Default::default()
        };
        let params: HashMap<String, String> = input.to_form_parameters().into_iter().collect();
        assert_eq!(
            params,
            HashMap::from([
                ("account_balance".to_string(), "0".to_string()),
                ("metadata[k]".to_string(), "v".to_string()),
                ("source".to_string(), "tok_abc".to_string()),
            ])
        );
    }

    #[test]
    fn card_form_parameters_lowercase_currency_and_omit_card_metadata() {
        let mut card = Card::new(12, 2025, "4242424242424242");
        card.currency = Some(Currency::USD);
        card.name = Some("Mr. Ed".to_string());
        card.metadata
            .insert("color".to_string(), "chestnut".to_string());
        let input = CustomerInput {
            account_balance: 50,
            source: Some(Source::Card(card)),
            ..Default::default()
        };
        let params: HashMap<String, String> = input.to_form_parameters().into_iter().collect();
        assert_eq!(params.get("source[object]"), Some(&"card".to_string()));
        assert_eq!(params.get("source[exp_month]"), Some(&"12".to_string()));
        assert_eq!(params.get("source[exp_year]"), Some(&"2025".to_string()));
        assert_eq!(
            params.get("source[number]"),
            Some(&"4242424242424242".to_string())
        );
        assert_eq!(params.get("source[currency]"), Some(&"usd".to_string()));
        assert_eq!(params.get("source[name]"), Some(&"Mr. Ed".to_string()));
        // Absent optionals contribute nothing, and card metadata has no
        // form representation.
        assert!(!params.contains_key("source[address_city]"));
        assert!(!params.keys().any(|k| k.contains("metadata")));
    }

    #[test]
    fn optional_scalars_contribute_only_when_present() {
        let input = CustomerInput {
            account_balance: 100,
            email: Some("mr.ed@example.com".to_string()),
            quantity: Some(2),
            tax_percent: Some(9.5),
            trial_end: Some(NonZeroUnixSeconds::try_from(1609459200).unwrap()),
            ..Default::default()
        };
        let params: HashMap<String, String> = input.to_form_parameters().into_iter().collect();
        assert_eq!(params.get("account_balance"), Some(&"100".to_string()));
        assert_eq!(params.get("email"), Some(&"mr.ed@example.com".to_string()));
        assert_eq!(params.get("quantity"), Some(&"2".to_string()));
        assert_eq!(params.get("tax_percent"), Some(&"9.5".to_string()));
        assert_eq!(params.get("trial_end"), Some(&"1609459200".to_string()));
        assert_eq!(params.len(), 5);
    }

    #[test]
    fn input_json_round_trip() {
        let input = CustomerInput {
            account_balance: 0,
            source: Some(Source::Token("tok_abc".to_string())),
            trial_end: Some(NonZeroUnixSeconds::try_from(1609459200).unwrap()),
            ..Default::default()
        };
        let encoded = serde_json::to_value(&input).expect("encode");
        assert_eq!(encoded.get("coupon"), Some(&json!(null)));
        assert_eq!(encoded.get("trial_end"), Some(&json!(1609459200)));
        assert_eq!(encoded.get("source"), Some(&json!("tok_abc")));
        let decoded: CustomerInput = serde_json::from_value(encoded).expect("decode");
        assert_eq!(decoded, input);
    }

    #[test]
    fn payment_source_discriminates_on_object() {
        let source: PaymentSource = serde_json::from_value(json!({
            "object": "bank_account",
            "id": "ba_1",
            "bank_name": "TEST BANK",
            "country": "US",
            "last4": "6789"
        }))
        .expect("bank account");
        match source {
            PaymentSource::BankAccount(account) => assert_eq!(account.last4, "6789"),
            other => panic!("expected bank account: {other:?}"),
        }
    }

    #[test]
    fn malformed_error_body_falls_back_to_raw() {
        match crate::payments::api_error::from_response(
            StatusCode::BAD_GATEWAY,
            "<html>oops</html>",
        ) {
            Error::Api(status, api_error) => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(api_error.error_type, ApiErrorType::Unknown);
                assert_eq!(api_error.message.as_deref(), Some("<html>oops</html>"));
            }
            other => panic!("expected api error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_customer_decodes_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/customers"))
            .and(header("Idempotency-Key", "idem_1"))
            .and(body_string_contains("account_balance=0"))
            .and(body_string_contains("source=tok_abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(customer_json()))
            .mount(&mock_server)
            .await;

        let client = PaymentsClient::new(&test_config(&mock_server.uri())).expect("client");
        let input = CustomerInput {
            account_balance: 0,
            source: Some(Source::Token("tok_abc".to_string())),
            ..Default::default()
        };
        let customer = client
            .create_customer(&input, Some("idem_1"))
            .await
            .expect("create");
        assert_eq!(customer.id.as_str(), "cus_123");
        assert_eq!(customer.email, "mr.ed@example.com");
    }

    #[tokio::test]
    async fn create_customer_flags_invalid_model() {
        let mock_server = MockServer::start().await;
        let mut body = customer_json();
        body.as_object_mut().unwrap().remove("created");
        Mock::given(method("POST"))
            .and(path("/v1/customers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&mock_server)
            .await;

        let client = PaymentsClient::new(&test_config(&mock_server.uri())).expect("client");
        let input = CustomerInput {
            account_balance: 0,
            ..Default::default()
        };
        match client.create_customer(&input, None).await {
            Err(Error::InvalidModel(invalid)) => {
                assert_eq!(invalid.status, StatusCode::OK);
                assert!(invalid.url.ends_with("/v1/customers"));
                assert!(invalid.errors[0].contains("created"), "{:?}", invalid.errors);
                assert!(invalid
                    .parameters
                    .contains(&("account_balance".to_string(), "0".to_string())));
            }
            other => panic!("expected invalid model: {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_customer_surfaces_api_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/customers"))
            .respond_with(ResponseTemplate::new(402).set_body_json(json!({
                "error": {
                    "type": "card_error",
                    "code": "card_declined",
                    "decline_code": "insufficient_funds",
                    "message": "Your card was declined."
                }
            })))
            .mount(&mock_server)
            .await;

        let client = PaymentsClient::new(&test_config(&mock_server.uri())).expect("client");
        let input = CustomerInput {
            account_balance: 0,
            source: Some(Source::Card(Card::new(12, 2025, "4000000000000002"))),
            ..Default::default()
        };
        match client.create_customer(&input, None).await {
            Err(Error::Api(status, api_error)) => {
                assert_eq!(status.as_u16(), 402);
                assert_eq!(api_error.error_type, ApiErrorType::CardError);
                assert_eq!(api_error.code.as_deref(), Some("card_declined"));
                assert_eq!(api_error.decline_code.as_deref(), Some("insufficient_funds"));
            }
            other => panic!("expected api error: {other:?}"),
        }
    }
}
