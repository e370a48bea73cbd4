//! Boot-time sample data

use super::Repository;
use crate::{
    config::SeedConfig,
    error::AppResult,
    models::{
        billboard::CreateBillboard,
        enums::{BillboardStatus, RequestStatus},
        request::CreateBookingRequest,
        user::CreateUser,
    },
};

struct SampleBillboard {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    size: &'static str,
    image_url: &'static str,
    status: BillboardStatus,
    daily: i64,
    weekly: i64,
    monthly: i64,
    address: &'static str,
    description: &'static str,
}

const SAMPLE_BILLBOARDS: &[SampleBillboard] = &[
    SampleBillboard {
        name: "Unity Road Junction",
        latitude: 8.4966,
        longitude: 4.5421,
        size: "48ft x 14ft",
        image_url: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800&h=600&fit=crop",
        status: BillboardStatus::Available,
        daily: 15420,
        weekly: 107940,
        monthly: 462600,
        address: "Unity Road, Ilorin, Kwara State",
        description: "Prime location at the busiest intersection in Ilorin",
    },
    SampleBillboard {
        name: "Challenge Roundabout",
        latitude: 8.4799,
        longitude: 4.5418,
        size: "40ft x 12ft",
        image_url: "https://images.unsplash.com/photo-1528658614691-3d1eb1dbe8c2?w=800&h=600&fit=crop",
        status: BillboardStatus::Occupied,
        daily: 12350,
        weekly: 86450,
        monthly: 370500,
        address: "Challenge Area, Ilorin, Kwara State",
        description: "High visibility location near major commercial hub",
    },
    SampleBillboard {
        name: "Taiwo Road Central",
        latitude: 8.485,
        longitude: 4.552,
        size: "32ft x 10ft",
        image_url: "https://images.unsplash.com/photo-1586861203927-800a5acdcc4d?w=800&h=600&fit=crop",
        status: BillboardStatus::Available,
        daily: 18900,
        weekly: 132300,
        monthly: 567000,
        address: "Taiwo Road, Ilorin, Kwara State",
        description: "Central business district with premium foot traffic",
    },
    SampleBillboard {
        name: "GRA Entrance",
        latitude: 8.501,
        longitude: 4.568,
        size: "48ft x 14ft",
        image_url: "https://images.unsplash.com/photo-1517604931442-7e0c8ed2963c?w=800&h=600&fit=crop",
        status: BillboardStatus::Available,
        daily: 9800,
        weekly: 68600,
        monthly: 294000,
        address: "GRA, Ilorin, Kwara State",
        description: "Upscale residential area targeting high-income demographics",
    },
    SampleBillboard {
        name: "Offa Garage Terminal",
        latitude: 8.472,
        longitude: 4.535,
        size: "40ft x 12ft",
        image_url: "https://images.unsplash.com/photo-1557804506-669a67965ba0?w=800&h=600&fit=crop",
        status: BillboardStatus::Occupied,
        daily: 22100,
        weekly: 154700,
        monthly: 663000,
        address: "Offa Garage, Ilorin, Kwara State",
        description: "Major transportation hub with constant commuter traffic",
    },
    SampleBillboard {
        name: "University Road",
        latitude: 8.458,
        longitude: 4.568,
        size: "36ft x 11ft",
        image_url: "https://images.unsplash.com/photo-1560179707-f14e90ef3623?w=800&h=600&fit=crop",
        status: BillboardStatus::Available,
        daily: 14200,
        weekly: 99400,
        monthly: 426000,
        address: "University Road, Ilorin, Kwara State",
        description: "Near University of Ilorin, targeting student and faculty demographics",
    },
];

/// (billboard index, name, email, phone, message, approved)
const SAMPLE_REQUESTS: &[(usize, &str, &str, &str, &str, bool)] = &[
    (
        0,
        "Adebayo Ogunleye",
        "adebayo@example.com",
        "+234 803 123 4567",
        "I would like to advertise my new restaurant opening on this billboard for 3 months.",
        false,
    ),
    (
        2,
        "Fatima Ibrahim",
        "fatima@company.ng",
        "+234 805 987 6543",
        "Looking to promote our fashion brand during the festive season.",
        true,
    ),
    (
        3,
        "Chukwuemeka Okoro",
        "cokoro@business.com",
        "+234 802 456 7890",
        "Interested in long-term advertising for my car dealership.",
        false,
    ),
];

impl Repository {
    /// Create a repository holding the admin user and, when enabled, the
    /// sample billboards and booking requests
    pub async fn seeded(config: &SeedConfig) -> AppResult<Self> {
        let repository = Self::new();

        repository
            .users
            .create(CreateUser {
                username: config.admin_username.clone(),
                password: config.admin_password.clone(),
                email: config.admin_email.clone(),
                role: "admin".to_string(),
            })
            .await?;

        if !config.enabled {
            tracing::info!("Sample data disabled, seeded admin user only");
            return Ok(repository);
        }

        let mut billboard_ids = Vec::with_capacity(SAMPLE_BILLBOARDS.len());
        for sample in SAMPLE_BILLBOARDS {
            let billboard = repository
                .billboards
                .create(CreateBillboard {
                    name: sample.name.to_string(),
                    latitude: sample.latitude,
                    longitude: sample.longitude,
                    size: sample.size.to_string(),
                    image_url: Some(sample.image_url.to_string()),
                    status: Some(sample.status),
                    daily_estimated_views: Some(sample.daily),
                    weekly_estimated_views: Some(sample.weekly),
                    monthly_estimated_views: Some(sample.monthly),
                    address: Some(sample.address.to_string()),
                    description: Some(sample.description.to_string()),
                })
                .await;
            billboard_ids.push(billboard.id);
        }

        for &(index, name, email, phone, message, approved) in SAMPLE_REQUESTS {
            let request = repository
                .requests
                .create(CreateBookingRequest {
                    billboard_id: billboard_ids[index].clone(),
                    name: name.to_string(),
                    email: email.to_string(),
                    phone: phone.to_string(),
                    message: Some(message.to_string()),
                })
                .await;
            if approved {
                repository
                    .requests
                    .update_status(&request.id, RequestStatus::Approved)
                    .await;
            }
        }

        tracing::info!(
            billboards = billboard_ids.len(),
            requests = SAMPLE_REQUESTS.len(),
            "Loaded sample data"
        );

        Ok(repository)
    }
}
