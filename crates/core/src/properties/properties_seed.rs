use chrono::Utc;
use rust_decimal_macros::dec;

use super::properties_model::{Property, PropertyStatus, PropertyType};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Demo listings shown before any seller adds their own.
pub fn demo_properties() -> Vec<Property> {
    let now = Utc::now();
    vec![
        Property {
            id: "1".to_string(),
            title: "Modern Downtown Apartment".to_string(),
            description: "A beautiful modern apartment in the heart of downtown with amazing city views.".to_string(),
            price: dec!(5500000),
            location: "Mumbai, Maharashtra".to_string(),
            address: "123 Seashore Tower, Marine Drive, Mumbai, Maharashtra 400001".to_string(),
            bedrooms: 2,
            bathrooms: 2,
            square_footage: 1200,
            images: strings(&[
                "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267",
                "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688",
            ]),
            features: strings(&["Balcony", "Hardwood Floors", "Stainless Steel Appliances"]),
            seller_id: "123".to_string(),
            seller_name: "John Doe".to_string(),
            created_at: now,
            status: PropertyStatus::Available,
            property_type: PropertyType::Apartment,
        },
        Property {
            id: "2".to_string(),
            title: "Suburban Family Home".to_string(),
            description: "Spacious family home in a quiet suburban neighborhood with a large backyard.".to_string(),
            price: dec!(8500000),
            location: "Bangalore, Karnataka".to_string(),
            address: "45 Green Valley Layout, Whitefield, Bangalore, Karnataka 560066".to_string(),
            bedrooms: 4,
            bathrooms: 3,
            square_footage: 2400,
            images: strings(&[
                "https://images.unsplash.com/photo-1564013799919-ab600027ffc6",
                "https://images.unsplash.com/photo-1576941089067-2de3c901e126",
            ]),
            features: strings(&["Swimming Pool", "Garage", "Garden"]),
            seller_id: "456".to_string(),
            seller_name: "Jane Smith".to_string(),
            created_at: now,
            status: PropertyStatus::Available,
            property_type: PropertyType::House,
        },
        Property {
            id: "3".to_string(),
            title: "Luxury Beachfront Villa".to_string(),
            description: "Stunning beachfront villa with panoramic ocean views and private access to the beach.".to_string(),
            price: dec!(22000000),
            location: "Goa, India".to_string(),
            address: "Villa 7, Sunset Beach Road, Calangute, North Goa, Goa 403516".to_string(),
            bedrooms: 5,
            bathrooms: 4,
            square_footage: 3500,
            images: strings(&[
                "https://images.unsplash.com/photo-1613490493576-7fde63acd811",
                "https://images.unsplash.com/photo-1512917774080-9991f1c4c750",
            ]),
            features: strings(&["Beach Access", "Swimming Pool", "Home Theater", "Wine Cellar"]),
            seller_id: "789".to_string(),
            seller_name: "Robert Johnson".to_string(),
            created_at: now,
            status: PropertyStatus::Available,
            property_type: PropertyType::House,
        },
        Property {
            id: "4".to_string(),
            title: "Urban Loft Apartment".to_string(),
            description: "Stylish loft apartment in a converted industrial building with original features.".to_string(),
            price: dec!(6250000),
            location: "Delhi, India".to_string(),
            address: "302 Heritage Lofts, Connaught Place, New Delhi, Delhi 110001".to_string(),
            bedrooms: 1,
            bathrooms: 2,
            square_footage: 1100,
            images: strings(&[
                "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2",
                "https://images.unsplash.com/photo-1554995207-c18c203602cb",
            ]),
            features: strings(&["High Ceilings", "Exposed Brick", "Open Layout"]),
            seller_id: "101".to_string(),
            seller_name: "Emily Wilson".to_string(),
            created_at: now,
            status: PropertyStatus::Available,
            property_type: PropertyType::Apartment,
        },
    ]
}
