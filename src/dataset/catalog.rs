//! 商品目录与尺码参考数据

use crate::models::{
    Audience, GarmentClass, Product, ProductCatalog, SizeChart, SizeGuideEntry, SizeLabel, SizeRow,
};

fn product(name: &str, price: u32, sizes: Vec<SizeLabel>, colors: &[&str], category: &str) -> Product {
    Product {
        name: name.to_string(),
        price,
        sizes,
        colors: colors.iter().map(|c| c.to_string()).collect(),
        category: category.to_string(),
    }
}

fn letters(labels: &[&str]) -> Vec<SizeLabel> {
    labels.iter().map(|l| SizeLabel::letter(l)).collect()
}

/// 商品目录：dresses, suits, casual
pub fn product_catalog() -> ProductCatalog {
    ProductCatalog::new(vec![
        (
            "dresses".to_string(),
            vec![
                product("Kitenge Office Dress", 2500, letters(&["S", "M", "L"]), &["Blue", "Green", "Red"], "traditional"),
                product("Ankara Evening Dress", 3500, letters(&["M", "L", "XL"]), &["Multi", "Gold", "Purple"], "traditional"),
                product("Casual Cotton Dress", 1500, letters(&["XS", "S", "M"]), &["White", "Black", "Navy"], "casual"),
            ],
        ),
        (
            "suits".to_string(),
            vec![
                product("Business Suit", 6000, letters(&["M", "L", "XL"]), &["Navy", "Charcoal", "Black"], "formal"),
                product("Ladies Blazer Set", 4500, letters(&["S", "M", "L"]), &["Navy", "Grey", "Burgundy"], "office"),
                product("Traditional Suit", 5500, letters(&["M", "L", "XL"]), &["Kente", "Ankara", "Kitenge"], "traditional"),
            ],
        ),
        (
            "casual".to_string(),
            vec![
                product("Cotton T-Shirt", 800, letters(&["S", "M", "L"]), &["White", "Black", "Blue"], "casual"),
                product(
                    "Designer Jeans",
                    2000,
                    vec![SizeLabel::Waist(30), SizeLabel::Waist(32), SizeLabel::Waist(34)],
                    &["Blue", "Black", "Grey"],
                    "casual",
                ),
                product("Casual Blouse", 1200, letters(&["XS", "S", "M"]), &["Floral", "Solid", "Striped"], "casual"),
            ],
        ),
    ])
}

const LETTER_SIZES: [&str; 6] = ["XS", "S", "M", "L", "XL", "XXL"];

fn letter_rows(measurements: [&[(&'static str, &'static str)]; 6]) -> Vec<SizeRow> {
    LETTER_SIZES
        .iter()
        .zip(measurements)
        .map(|(label, fields)| SizeRow {
            label: SizeLabel::letter(label),
            measurements: fields.to_vec(),
        })
        .collect()
}

fn local_sizes(values: [u32; 6]) -> Option<Vec<(SizeLabel, u32)>> {
    Some(
        LETTER_SIZES
            .iter()
            .zip(values)
            .map(|(label, local)| (SizeLabel::letter(label), local))
            .collect(),
    )
}

/// 尺码参考表
pub fn size_chart() -> SizeChart {
    let dresses = SizeGuideEntry {
        audience: Audience::Women,
        garment: GarmentClass::Dresses,
        rows: letter_rows([
            &[("bust", "30-32\""), ("waist", "24-26\""), ("hips", "34-36\"")],
            &[("bust", "32-34\""), ("waist", "26-28\""), ("hips", "36-38\"")],
            &[("bust", "34-36\""), ("waist", "28-30\""), ("hips", "38-40\"")],
            &[("bust", "36-38\""), ("waist", "30-32\""), ("hips", "40-42\"")],
            &[("bust", "38-40\""), ("waist", "32-34\""), ("hips", "42-44\"")],
            &[("bust", "40-42\""), ("waist", "34-36\""), ("hips", "44-46\"")],
        ]),
        local_sizes: local_sizes([8, 10, 12, 14, 16, 18]),
    };

    let tops = SizeGuideEntry {
        audience: Audience::Women,
        garment: GarmentClass::Tops,
        rows: letter_rows([
            &[("bust", "30-32\""), ("waist", "24-26\"")],
            &[("bust", "32-34\""), ("waist", "26-28\"")],
            &[("bust", "34-36\""), ("waist", "28-30\"")],
            &[("bust", "36-38\""), ("waist", "30-32\"")],
            &[("bust", "38-40\""), ("waist", "32-34\"")],
            &[("bust", "40-42\""), ("waist", "34-36\"")],
        ]),
        local_sizes: None,
    };

    let shirts = SizeGuideEntry {
        audience: Audience::Men,
        garment: GarmentClass::Shirts,
        rows: letter_rows([
            &[("chest", "34-36\""), ("waist", "28-30\""), ("sleeve", "32\"")],
            &[("chest", "36-38\""), ("waist", "30-32\""), ("sleeve", "33\"")],
            &[("chest", "38-40\""), ("waist", "32-34\""), ("sleeve", "34\"")],
            &[("chest", "40-42\""), ("waist", "34-36\""), ("sleeve", "35\"")],
            &[("chest", "42-44\""), ("waist", "36-38\""), ("sleeve", "36\"")],
            &[("chest", "44-46\""), ("waist", "38-40\""), ("sleeve", "37\"")],
        ]),
        local_sizes: local_sizes([36, 38, 40, 42, 44, 46]),
    };

    const WAISTS: [(u32, &str); 7] = [
        (28, "28\""),
        (30, "30\""),
        (32, "32\""),
        (34, "34\""),
        (36, "36\""),
        (38, "38\""),
        (40, "40\""),
    ];
    let trousers = SizeGuideEntry {
        audience: Audience::Men,
        garment: GarmentClass::Trousers,
        rows: WAISTS
            .iter()
            .map(|(waist, label)| SizeRow {
                label: SizeLabel::Waist(*waist),
                measurements: vec![("waist", *label), ("inseam", "32\"")],
            })
            .collect(),
        local_sizes: None,
    };

    SizeChart {
        entries: vec![dresses, tops, shirts, trousers],
        general_tips: vec![
            "📏 How to measure: Use a soft tape measure over light clothing",
            "👕 For tops: Measure around the fullest part of your bust/chest",
            "👖 For bottoms: Measure natural waistline (above belly button)",
            "👗 Dresses: Measure bust, waist, and hips",
            "🔄 If between sizes: Size up for comfort, down for fitted look",
            "✂️ Free alterations available for all Nairobi store purchases",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_collections_in_order() {
        let catalog = product_catalog();
        let names: Vec<&str> = catalog.collection_names().collect();
        assert_eq!(names, vec!["dresses", "suits", "casual"]);
        assert_eq!(catalog.product_count(), 9);
    }

    #[test]
    fn test_every_class_has_rows() {
        let chart = size_chart();
        for entry in &chart.entries {
            assert!(!entry.rows.is_empty());
        }
        let trousers = chart.entry(Audience::Men, GarmentClass::Trousers).unwrap();
        assert_eq!(trousers.rows.len(), 7);
        assert!(trousers.local_sizes.is_none());
    }
}
