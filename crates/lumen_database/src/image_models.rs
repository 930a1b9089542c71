//! Diesel models for the images table.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use lumen_core::{Dimensions, ImageRecord, NewImageRecord, ResponsiveUrls};
use lumen_error::{DatabaseError, DatabaseErrorKind};
use uuid::Uuid;

/// Database row for images table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ImageRow {
    pub id: Uuid,
    pub url: String,
    pub public_id: String,
    pub original_name: Option<String>,
    pub size_bytes: Option<i64>,
    pub optimized_size_bytes: Option<i64>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub format: Option<String>,

    // Responsive variants
    pub thumbnail_url: Option<String>,
    pub small_url: Option<String>,
    pub medium_url: Option<String>,
    pub large_url: Option<String>,
    pub original_url: Option<String>,

    // Timestamps
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for images table.
///
/// `id` and the timestamps are filled by column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::images)]
pub struct NewImageRow {
    pub url: String,
    pub public_id: String,
    pub original_name: Option<String>,
    pub size_bytes: Option<i64>,
    pub optimized_size_bytes: Option<i64>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub format: Option<String>,
    pub thumbnail_url: Option<String>,
    pub small_url: Option<String>,
    pub medium_url: Option<String>,
    pub large_url: Option<String>,
    pub original_url: Option<String>,
}

fn conversion(message: String) -> DatabaseError {
    DatabaseError::new(DatabaseErrorKind::Conversion(message))
}

fn to_column<T, U>(value: Option<T>, column: &str) -> Result<Option<U>, DatabaseError>
where
    T: Copy + std::fmt::Display,
    U: TryFrom<T>,
{
    value
        .map(|v| U::try_from(v).map_err(|_| conversion(format!("{} out of range: {}", column, v))))
        .transpose()
}

impl TryFrom<&NewImageRecord> for NewImageRow {
    type Error = DatabaseError;

    fn try_from(record: &NewImageRecord) -> Result<Self, Self::Error> {
        let urls = record.responsive_urls.as_ref();
        Ok(Self {
            url: record.url.clone(),
            public_id: record.public_id.clone(),
            original_name: record.original_name.clone(),
            size_bytes: to_column(record.size, "size_bytes")?,
            optimized_size_bytes: to_column(record.optimized_size, "optimized_size_bytes")?,
            width: to_column(record.dimensions.map(|d| d.width), "width")?,
            height: to_column(record.dimensions.map(|d| d.height), "height")?,
            format: record.format.clone(),
            thumbnail_url: urls.map(|u| u.thumbnail.clone()),
            small_url: urls.map(|u| u.small.clone()),
            medium_url: urls.map(|u| u.medium.clone()),
            large_url: urls.map(|u| u.large.clone()),
            original_url: urls.map(|u| u.original.clone()),
        })
    }
}

impl TryFrom<ImageRow> for ImageRecord {
    type Error = DatabaseError;

    fn try_from(row: ImageRow) -> Result<Self, Self::Error> {
        let width: Option<u32> = to_column(row.width, "width")?;
        let height: Option<u32> = to_column(row.height, "height")?;
        let dimensions = width
            .zip(height)
            .map(|(width, height)| Dimensions::new(width, height));

        let responsive_urls = match (
            row.thumbnail_url,
            row.small_url,
            row.medium_url,
            row.large_url,
            row.original_url,
        ) {
            (Some(thumbnail), Some(small), Some(medium), Some(large), Some(original)) => {
                Some(ResponsiveUrls {
                    thumbnail,
                    small,
                    medium,
                    large,
                    original,
                })
            }
            _ => None,
        };

        Ok(ImageRecord {
            id: row.id,
            url: row.url,
            public_id: row.public_id,
            original_name: row.original_name,
            size: to_column(row.size_bytes, "size_bytes")?,
            optimized_size: to_column(row.optimized_size_bytes, "optimized_size_bytes")?,
            dimensions,
            format: row.format,
            responsive_urls,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_record() -> NewImageRecord {
        NewImageRecord {
            url: "https://cdn/u".to_string(),
            public_id: "my-images/1-2".to_string(),
            original_name: Some("a.png".to_string()),
            size: Some(1000),
            optimized_size: Some(400),
            dimensions: Some(Dimensions::new(800, 600)),
            format: Some("webp".to_string()),
            responsive_urls: Some(ResponsiveUrls {
                thumbnail: "t".to_string(),
                small: "s".to_string(),
                medium: "m".to_string(),
                large: "l".to_string(),
                original: "o".to_string(),
            }),
        }
    }

    fn row_from(new_row: NewImageRow) -> ImageRow {
        let now = Utc::now();
        ImageRow {
            id: Uuid::new_v4(),
            url: new_row.url,
            public_id: new_row.public_id,
            original_name: new_row.original_name,
            size_bytes: new_row.size_bytes,
            optimized_size_bytes: new_row.optimized_size_bytes,
            width: new_row.width,
            height: new_row.height,
            format: new_row.format,
            thumbnail_url: new_row.thumbnail_url,
            small_url: new_row.small_url,
            medium_url: new_row.medium_url,
            large_url: new_row.large_url,
            original_url: new_row.original_url,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn full_record_survives_row_mapping() {
        let record = new_record();
        let row = row_from(NewImageRow::try_from(&record).unwrap());
        let stored = ImageRecord::try_from(row).unwrap();

        assert_eq!(stored.public_id, record.public_id);
        assert_eq!(stored.size, Some(1000));
        assert_eq!(stored.dimensions, record.dimensions);
        assert_eq!(stored.responsive_urls, record.responsive_urls);
    }

    #[test]
    fn partial_variant_columns_yield_no_urls() {
        let mut row = row_from(NewImageRow::try_from(&new_record()).unwrap());
        row.large_url = None;
        let stored = ImageRecord::try_from(row).unwrap();
        assert!(stored.responsive_urls.is_none());
    }

    #[test]
    fn negative_size_is_rejected() {
        let mut row = row_from(NewImageRow::try_from(&new_record()).unwrap());
        row.size_bytes = Some(-1);
        let err = ImageRecord::try_from(row).unwrap_err();
        assert!(matches!(err.kind, DatabaseErrorKind::Conversion(_)));
    }

    #[test]
    fn oversized_byte_count_is_rejected() {
        let mut record = new_record();
        record.size = Some(u64::MAX);
        assert!(NewImageRow::try_from(&record).is_err());
    }
}
