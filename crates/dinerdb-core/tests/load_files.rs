// crates/dinerdb-core/tests/load_files.rs
use dinerdb_core::loader::DataSources;
use dinerdb_core::{DinerDb, Relation, StoreConfig};
use std::fs;
use std::path::PathBuf;

const ANN: u64 = 1234567891234567;
const BO: u64 = 1234567891234568;
const CAFE: u64 = 1234567891234569;

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("dinerdb-{}-{}", std::process::id(), name))
}

fn customers_csv() -> String {
    format!(
        "id,first,last,joined,lat,lon\n\
         {ANN},Ann,Lee,2020-01-01 10:00:00,52.38,-1.56\n\
         not-a-number,Bad,Row,2020-01-01 10:00:00,52.38,-1.56\n\
         {BO},Bo,Ray,2020-01-02 10:00:00,0,-1.56\n"
    )
}

fn restaurants_csv() -> String {
    format!(
        "id,name,ownerFirst,ownerLast,cuisine,type,price,established,lat,lon,vegan,table,alcohol,wifi,access,online,inspected,food,stars,rating\n\
         {CAFE}{CAFE}{CAFE},Café Rouge,Jean,Dupont,French,Cafe,Moderate,2005-05-05 00:00:00,52.29,-1.53,true,true,true,false,true,false,2022-02-02 00:00:00,5,2,4.5\n"
    )
}

#[test]
fn loads_csv_files_and_skips_bad_rows() {
    let customers = scratch("customers.csv");
    let restaurants = scratch("restaurants.csv");
    let reviews = scratch("reviews.csv");
    fs::write(&customers, customers_csv()).unwrap();
    fs::write(&restaurants, restaurants_csv()).unwrap();
    fs::write(
        &reviews,
        format!(
            "id,customer,restaurant,date,review,rating\n\
             {BO},{ANN},{CAFE},2023-03-03 19:00:00,excellent, truly excellent,5\n"
        ),
    )
    .unwrap();

    let sources = DataSources {
        customers: Some(customers.clone()),
        restaurants: Some(restaurants.clone()),
        reviews: Some(reviews.clone()),
        ..DataSources::default()
    };
    let db = DinerDb::load(&sources, StoreConfig::default()).unwrap();

    let stats = db.stats();
    assert_eq!(stats.customers, 1);
    assert_eq!(stats.restaurants, 1);
    assert_eq!(stats.reviews, 1);
    assert_eq!(db.restaurants.restaurants_containing("cafe")[0].id(), CAFE);
    assert_eq!(db.reviews.reviews()[0].review(), "excellent, truly excellent");
    assert_eq!(db.reviews.top_keywords(CAFE), ["excellent"]);
    assert_eq!(db.reviews.average_rating(Relation::Customer, ANN), Some(5.0));

    for path in [customers, restaurants, reviews] {
        let _ = fs::remove_file(path);
    }
}

#[test]
fn loads_tab_separated_files() {
    let favourites = scratch("favourites.tsv");
    fs::write(
        &favourites,
        format!("id\tcustomer\trestaurant\tdate\n{BO}\t{ANN}\t{CAFE}\t2021-07-07 08:00:00\n"),
    )
    .unwrap();

    let sources = DataSources {
        favourites: Some(favourites.clone()),
        ..DataSources::default()
    }
    .tsv();
    let db = DinerDb::load(&sources, StoreConfig::default()).unwrap();
    assert_eq!(db.favourites.favourites_by_customer(ANN).len(), 1);

    let _ = fs::remove_file(favourites);
}

#[test]
fn mixes_csv_and_tsv_files_in_one_load() {
    let customers = scratch("mixed-customers.csv");
    let reviews = scratch("mixed-reviews.tsv");
    fs::write(&customers, customers_csv()).unwrap();
    fs::write(
        &reviews,
        format!(
            "id\tcustomer\trestaurant\tdate\treview\trating\n\
             {BO}\t{ANN}\t{CAFE}\t2023-03-03 19:00:00\tbland, then sublime\t4\n"
        ),
    )
    .unwrap();

    let sources = DataSources {
        customers: Some(customers.clone()),
        reviews: Some(reviews.clone()),
        ..DataSources::default()
    };
    let db = DinerDb::load(&sources, StoreConfig::default()).unwrap();
    assert_eq!(db.stats().customers, 1);
    assert_eq!(db.stats().reviews, 1);
    assert_eq!(db.reviews.reviews()[0].review(), "bland, then sublime");

    let forced = DinerDb::load(&sources.clone().tsv(), StoreConfig::default()).unwrap();
    assert_eq!(forced.stats().customers, 0);
    assert_eq!(forced.stats().reviews, 1);

    for path in [customers, reviews] {
        let _ = fs::remove_file(path);
    }
}

#[cfg(feature = "compact")]
#[test]
fn reads_gzipped_input() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let customers = scratch("customers.csv.gz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(customers_csv().as_bytes()).unwrap();
    fs::write(&customers, encoder.finish().unwrap()).unwrap();

    let sources = DataSources {
        customers: Some(customers.clone()),
        ..DataSources::default()
    };
    let db = DinerDb::load(&sources, StoreConfig::default()).unwrap();
    assert_eq!(db.customers.customers()[0].first_name(), "Ann");

    let _ = fs::remove_file(customers);
}
