pub const HERO_TITLE: &str = "Classic Mode";
pub const HERO_TAGLINE: &str = "Timeless Fashion for the Modern You";
pub const HERO_CTA: &str = "Shop Now";

pub const COLLECTION_TITLE: &str = "Featured Collection";
pub const COLLECTION_DESCRIPTION: &str = "Discover our carefully curated selection of timeless pieces that blend classic elegance with modern sophistication.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub price: &'static str,
    pub image: &'static str,
}

pub fn featured_products() -> Vec<Product> {
    return vec![
        Product {
            id: 1,
            name: "Classic Blazer",
            price: "$189.99",
            image: "/images/blazer.jpg",
        },
        Product {
            id: 2,
            name: "Elegant Dress",
            price: "$159.99",
            image: "/images/dress.jpg",
        },
        Product {
            id: 3,
            name: "Tailored Pants",
            price: "$99.99",
            image: "/images/pants.jpg",
        },
        Product {
            id: 4,
            name: "Silk Blouse",
            price: "$129.99",
            image: "/images/blouse.jpg",
        },
        Product {
            id: 5,
            name: "Classic Coat",
            price: "$249.99",
            image: "/images/coat.jpg",
        },
        Product {
            id: 6,
            name: "Evening Gown",
            price: "$299.99",
            image: "/images/gown.jpg",
        },
    ];
}
