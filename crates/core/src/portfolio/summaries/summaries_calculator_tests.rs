use super::*;
use crate::holdings::{
    Bond, BondType, BusinessStake, BusinessStatus, CryptoHolding, Property, PropertyStatus,
    PropertyType, RentType, RentalInfo, Share,
};
use crate::scoring::HealthStatus;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn bond_book() -> Vec<Bond> {
    vec![
        Bond {
            id: "b1".to_string(),
            ticker: "UST10".to_string(),
            bond_type: BondType::Government,
            face_value: Some(dec!(10000)),
            coupon_rate: Some(dec!(4)),
            current_price: Some(dec!(9800)),
            yield_to_maturity: Some(dec!(4.5)),
            maturity_date: Some(date(2030, 1, 1)),
            ..Default::default()
        },
        Bond {
            id: "b2".to_string(),
            ticker: "CORP".to_string(),
            bond_type: BondType::Corporate,
            face_value: Some(dec!(5000)),
            coupon_rate: Some(dec!(6)),
            current_price: Some(dec!(5200)),
            yield_to_maturity: Some(dec!(5.5)),
            maturity_date: Some(date(2026, 3, 1)),
            ..Default::default()
        },
        Bond {
            id: "b3".to_string(),
            ticker: "MUNI".to_string(),
            bond_type: BondType::Municipal,
            face_value: Some(dec!(2000)),
            current_price: Some(dec!(1000)),
            ..Default::default()
        },
    ]
}

fn share(symbol: &str, sector: Option<&str>) -> Share {
    Share {
        id: symbol.to_lowercase(),
        symbol: symbol.to_string(),
        sector: sector.map(str::to_string),
        ..Default::default()
    }
}

// ==================== Bonds ====================

#[test]
fn test_bond_totals_and_yield() {
    let summary = summarize_bonds(&bond_book(), date(2025, 1, 1));

    assert_eq!(summary.total_value, dec!(16000));
    assert_eq!(summary.annual_income, dec!(700));
    // Missing yield counts as zero in the mean
    assert_eq!(summary.average_yield.round_dp(4), dec!(3.3333));
}

#[test]
fn test_bond_maturity_ladder() {
    let summary = summarize_bonds(&bond_book(), date(2025, 1, 1));

    let tickers: Vec<&str> = summary
        .maturity_schedule
        .iter()
        .map(|e| e.ticker.as_str())
        .collect();
    assert_eq!(tickers, vec!["CORP", "UST10"]);

    let corp = &summary.maturity_schedule[0];
    assert_eq!((corp.years_remaining, corp.months_remaining), (1, 1));
    assert_eq!(corp.face_value, dec!(5000));

    let ust = &summary.maturity_schedule[1];
    assert_eq!((ust.years_remaining, ust.months_remaining), (5, 0));

    assert_eq!(summary.next_maturity.as_ref().map(|e| e.bond_id.as_str()), Some("b2"));
}

#[test]
fn test_bond_next_maturity_skips_matured() {
    let summary = summarize_bonds(&bond_book(), date(2027, 1, 1));

    let corp = &summary.maturity_schedule[0];
    assert_eq!((corp.years_remaining, corp.months_remaining), (0, 0));
    assert_eq!(summary.next_maturity.map(|e| e.ticker), Some("UST10".to_string()));
}

#[test]
fn test_bond_allocation_by_type() {
    let summary = summarize_bonds(&bond_book(), date(2025, 1, 1));

    let allocation: Vec<(&str, Decimal)> = summary
        .allocation_by_type
        .iter()
        .map(|w| (w.category.as_str(), w.percentage))
        .collect();
    assert_eq!(
        allocation,
        vec![
            ("Government", dec!(61.25)),
            ("Corporate", dec!(32.5)),
            ("Municipal", dec!(6.25)),
        ]
    );
}

#[test]
fn test_empty_bond_book() {
    let summary = summarize_bonds(&[], date(2025, 1, 1));

    assert_eq!(summary.total_value, Decimal::ZERO);
    assert_eq!(summary.average_yield, Decimal::ZERO);
    assert!(summary.next_maturity.is_none());
    assert!(summary.maturity_schedule.is_empty());
    assert!(summary.allocation_by_type.is_empty());
}

// ==================== Real estate ====================

#[test]
fn test_real_estate_summary() {
    let properties = vec![
        Property {
            id: "p1".to_string(),
            name: "City flat".to_string(),
            current_value: Some(dec!(500000)),
            equity: Some(dec!(200000)),
            appreciation: Some(dec!(10)),
            status: PropertyStatus::Rented,
            rental_info: Some(RentalInfo {
                rent_type: RentType::Monthly,
                rent_amount: Some(dec!(2000)),
                start_date: None,
            }),
            ..Default::default()
        },
        Property {
            id: "p2".to_string(),
            name: "Family home".to_string(),
            current_value: Some(dec!(300000)),
            equity: Some(dec!(300000)),
            appreciation: Some(dec!(20)),
            status: PropertyStatus::Owned,
            // Rent on a property that is not rented out is ignored
            rental_info: Some(RentalInfo {
                rent_type: RentType::Monthly,
                rent_amount: Some(dec!(1500)),
                start_date: None,
            }),
            ..Default::default()
        },
        Property {
            id: "p3".to_string(),
            name: "Shop".to_string(),
            current_value: Some(dec!(240000)),
            equity: Some(dec!(100000)),
            status: PropertyStatus::Rented,
            rental_info: Some(RentalInfo {
                rent_type: RentType::Yearly,
                rent_amount: Some(dec!(24000)),
                start_date: None,
            }),
            ..Default::default()
        },
        Property {
            id: "p4".to_string(),
            name: "Old plot".to_string(),
            current_value: Some(dec!(1000000)),
            status: PropertyStatus::Sold,
            ..Default::default()
        },
    ];

    let summary = summarize_real_estate(&properties);

    assert_eq!(summary.property_count, 3);
    assert_eq!(summary.total_valuation, dec!(1040000));
    assert_eq!(summary.total_equity, dec!(600000));
    assert_eq!(summary.average_appreciation, dec!(10));
    assert_eq!(summary.monthly_rental_income, dec!(4000));
    // 48000 a year over the 740000 of rented property
    assert_eq!(summary.rental_yield_percent.round_dp(2), dec!(6.49));

    assert_eq!(rental_yield(&properties[0]), dec!(4.8));
    assert_eq!(rental_yield(&properties[1]), Decimal::ZERO);
    assert_eq!(rental_yield(&properties[2]), dec!(10));
}

#[test]
fn test_empty_real_estate() {
    let summary = summarize_real_estate(&[]);
    assert_eq!(summary.property_count, 0);
    assert_eq!(summary.average_appreciation, Decimal::ZERO);
    assert_eq!(summary.monthly_rental_income, Decimal::ZERO);
    assert_eq!(summary.rental_yield_percent, Decimal::ZERO);
}

#[test]
fn test_rental_yield_without_value_is_zero() {
    let property = Property {
        status: PropertyStatus::Rented,
        rental_info: Some(RentalInfo {
            rent_type: RentType::Monthly,
            rent_amount: Some(dec!(1000)),
            start_date: None,
        }),
        ..Default::default()
    };
    assert_eq!(rental_yield(&property), Decimal::ZERO);
    assert_eq!(summarize_real_estate(&[property]).rental_yield_percent, Decimal::ZERO);
}

fn located(id: &str, city: &str, property_type: PropertyType, value: Decimal) -> Property {
    Property {
        id: id.to_string(),
        name: id.to_uppercase(),
        city: Some(city.to_string()),
        property_type,
        current_value: Some(value),
        ..Default::default()
    }
}

#[test]
fn test_diversification_of_empty_book() {
    let result = analyze_real_estate_diversification(&[]);

    assert_eq!(result.score, 0);
    assert_eq!(result.grade, DiversificationGrade::NotApplicable);
    assert_eq!(result.grade.to_string(), "N/A");
    assert_eq!(result.average_concentration, Decimal::ZERO);
    assert!(result.by_city.is_empty());
}

#[test]
fn test_diversification_of_single_property() {
    let sold = Property {
        status: PropertyStatus::Sold,
        ..located("p2", "Delhi", PropertyType::Land, dec!(900))
    };
    let result = analyze_real_estate_diversification(&[
        located("p1", "Mumbai", PropertyType::Residential, dec!(500)),
        sold,
    ]);

    assert_eq!(result.score, 10);
    assert_eq!(result.grade, DiversificationGrade::D);
    assert_eq!(result.city_concentration_percent, dec!(100));
    assert_eq!(result.type_concentration_percent, dec!(100));
    assert_eq!(result.max_single_asset_percent, dec!(100));
    assert_eq!(result.by_city.len(), 1);
}

#[test]
fn test_diversification_across_cities() {
    let properties = vec![
        located("p1", "Mumbai", PropertyType::Residential, dec!(500)),
        located("p2", "Pune, MH", PropertyType::Commercial, dec!(300)),
        located("p3", " Mumbai ", PropertyType::Residential, dec!(200)),
        Property {
            status: PropertyStatus::Sold,
            ..located("p4", "Goa", PropertyType::Land, dec!(5000))
        },
    ];

    let result = analyze_real_estate_diversification(&properties);

    assert_eq!(result.city_concentration_percent, dec!(58));
    assert_eq!(result.type_concentration_percent, dec!(58));
    assert_eq!(result.max_single_asset_percent, dec!(50));
    // Penalty 23.2 + 20.3 + 6.25
    assert_eq!(result.score, 50);
    assert_eq!(result.grade, DiversificationGrade::C);
    assert_eq!(result.average_concentration, dec!(55.3));

    let cities: Vec<(&str, Decimal)> = result
        .by_city
        .iter()
        .map(|w| (w.category.as_str(), w.percentage))
        .collect();
    assert_eq!(cities, vec![("Mumbai", dec!(70)), ("Pune", dec!(30))]);
    assert_eq!(result.by_type[0].category, "Residential");
}

#[test]
fn test_diversification_of_spread_book() {
    let properties = vec![
        located("p1", "Mumbai", PropertyType::Residential, dec!(250)),
        located("p2", "Pune", PropertyType::Commercial, dec!(250)),
        located("p3", "Delhi", PropertyType::Land, dec!(250)),
        Property {
            city: None,
            ..located("p4", "", PropertyType::Residential, dec!(250))
        },
    ];

    let result = analyze_real_estate_diversification(&properties);

    assert_eq!(result.city_concentration_percent, dec!(25));
    assert_eq!(result.type_concentration_percent, dec!(37.5));
    assert_eq!(result.max_single_asset_percent, dec!(25));
    assert_eq!(result.score, 75);
    assert_eq!(result.grade, DiversificationGrade::A);
    assert_eq!(result.average_concentration, dec!(29.2));
    assert!(result.by_city.iter().any(|w| w.category == "Unknown"));
}

#[test]
fn test_diversification_grade_bands() {
    assert_eq!(DiversificationGrade::from_score(100), DiversificationGrade::A);
    assert_eq!(DiversificationGrade::from_score(74), DiversificationGrade::B);
    assert_eq!(DiversificationGrade::from_score(55), DiversificationGrade::B);
    assert_eq!(DiversificationGrade::from_score(35), DiversificationGrade::C);
    assert_eq!(DiversificationGrade::from_score(34), DiversificationGrade::D);
    assert_eq!(serde_json::to_string(&DiversificationGrade::NotApplicable).unwrap(), "\"N/A\"");
}

// ==================== Business ====================

fn stakes() -> Vec<BusinessStake> {
    vec![
        BusinessStake {
            id: "s1".to_string(),
            name: "Bakery".to_string(),
            ownership_percent: Some(dec!(50)),
            valuation: Some(dec!(1000000)),
            annual_revenue: Some(dec!(400000)),
            annual_profit: Some(dec!(120000)),
            status: BusinessStatus::Active,
            ..Default::default()
        },
        BusinessStake {
            id: "s2".to_string(),
            name: "Studio".to_string(),
            ownership_percent: Some(dec!(25)),
            valuation: Some(dec!(400000)),
            annual_revenue: Some(dec!(200000)),
            annual_profit: Some(dec!(20000)),
            status: BusinessStatus::Growing,
            ..Default::default()
        },
        BusinessStake {
            id: "s3".to_string(),
            name: "Kiosk".to_string(),
            ownership_percent: Some(dec!(75)),
            status: BusinessStatus::Sold,
            ..Default::default()
        },
    ]
}

#[test]
fn test_business_summary_is_ownership_weighted() {
    let summary = summarize_businesses(&stakes());

    assert_eq!(summary.total_valuation, dec!(600000));
    assert_eq!(summary.total_revenue, dec!(250000));
    assert_eq!(summary.total_profit, dec!(65000));
    assert_eq!(summary.average_ownership, dec!(50));
    assert_eq!(summary.active_count, 2);
    assert_eq!(summary.health, HealthStatus::Healthy);
}

#[test]
fn test_empty_business_summary() {
    let summary = summarize_businesses(&[]);
    assert_eq!(summary.average_ownership, Decimal::ZERO);
    assert_eq!(summary.active_count, 0);
    assert_eq!(summary.health, HealthStatus::AtRisk);
}

#[test]
fn test_profit_margin() {
    let book = stakes();
    assert_eq!(profit_margin(&book[0]), dec!(30));
    assert_eq!(profit_margin(&book[1]), dec!(10));
    assert_eq!(profit_margin(&book[2]), Decimal::ZERO);
}

// ==================== Shares ====================

fn share_book() -> Vec<Share> {
    vec![
        Share {
            quantity: Some(dec!(10)),
            current_price: Some(dec!(100)),
            total_invested: Some(dec!(800)),
            ..share("AAA", Some("Technology"))
        },
        Share {
            total_value: Some(dec!(1000)),
            total_invested: Some(dec!(2000)),
            ..share("BBB", None)
        },
        Share {
            quantity: Some(dec!(5)),
            current_price: Some(dec!(200)),
            avg_buy_price: Some(dec!(200)),
            ..share("CCC", Some("Technology"))
        },
        Share {
            quantity: Some(dec!(1)),
            current_price: Some(dec!(1000)),
            avg_buy_price: Some(dec!(800)),
            ..share("DDD", Some("Finance"))
        },
    ]
}

#[test]
fn test_sector_exposure() {
    let sectors = sector_exposure(&share_book());

    let weights: Vec<(&str, Decimal, Decimal)> = sectors
        .iter()
        .map(|w| (w.category.as_str(), w.value, w.percentage))
        .collect();
    // Equal weights keep first-seen order
    assert_eq!(
        weights,
        vec![
            ("Technology", dec!(2000), dec!(50)),
            ("Other", dec!(1000), dec!(25)),
            ("Finance", dec!(1000), dec!(25)),
        ]
    );
}

#[test]
fn test_blank_sector_is_other() {
    let shares = vec![Share {
        total_value: Some(dec!(10)),
        ..share("ZZZ", Some("  "))
    }];
    let sectors = sector_exposure(&shares);
    assert_eq!(sectors[0].category, "Other");
    assert_eq!(sectors[0].percentage, dec!(100));
}

#[test]
fn test_best_and_worst_performers() {
    let (best, worst) = best_and_worst_performers(&share_book()).unwrap();

    // AAA and DDD both gained 25%; the earlier one wins
    assert_eq!(best.symbol, "AAA");
    assert_eq!(best.gain_loss_percent, dec!(25));
    assert_eq!(worst.symbol, "BBB");
    assert_eq!(worst.gain_loss_percent, dec!(-50));
}

#[test]
fn test_performers_of_empty_book() {
    assert!(best_and_worst_performers(&[]).is_none());
}

// ==================== Crypto ====================

#[test]
fn test_crypto_allocation_merges_wallets() {
    let holdings = vec![
        CryptoHolding {
            id: "c1".to_string(),
            symbol: "BTC".to_string(),
            quantity: Some(dec!(1)),
            current_price: Some(dec!(30000)),
            ..Default::default()
        },
        CryptoHolding {
            id: "c2".to_string(),
            symbol: "eth".to_string(),
            quantity: Some(dec!(10)),
            current_price: Some(dec!(1500)),
            ..Default::default()
        },
        CryptoHolding {
            id: "c3".to_string(),
            symbol: "btc ".to_string(),
            quantity: Some(dec!(0.5)),
            current_price: Some(dec!(30000)),
            ..Default::default()
        },
    ];

    let allocation = crypto_allocation(&holdings);

    assert_eq!(allocation.len(), 2);
    assert_eq!(allocation[0].category, "BTC");
    assert_eq!(allocation[0].value, dec!(45000));
    assert_eq!(allocation[0].percentage, dec!(75));
    assert_eq!(allocation[1].category, "ETH");
    assert_eq!(allocation[1].percentage, dec!(25));
}
