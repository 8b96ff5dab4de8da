pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{address_builder::*, record_builder::*};

pub mod record_builder {

    use super::*;
    use crate::{address::*, coordinate::*, id::*, record::*, revision::*};

    #[derive(Debug)]
    pub struct HostRecordBuild {
        record: HostRecord,
    }

    impl HostRecordBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.record.id = id.into();
            self
        }
        pub fn revision(mut self, v: u64) -> Self {
            self.record.revision = Revision::from(v);
            self
        }
        pub fn address(mut self, address: Address) -> Self {
            self.record.address = Some(address);
            self
        }
        pub fn geocoded(mut self, lat: f64, lng: f64) -> Self {
            self.record.coordinate = Some(Coordinate::geocoded(lat, lng));
            self
        }
        pub fn manually_located(mut self, lat: f64, lng: f64) -> Self {
            self.record.coordinate = Some(Coordinate {
                lat,
                lng,
                manually_set: true,
            });
            self
        }
        pub fn finish(self) -> HostRecord {
            self.record
        }
    }

    impl Builder for HostRecord {
        type Build = HostRecordBuild;
        fn build() -> HostRecordBuild {
            HostRecordBuild {
                record: HostRecord::new(Id::new()),
            }
        }
    }
}

pub mod address_builder {

    use super::*;
    use crate::address::*;

    #[derive(Debug)]
    pub struct AddressBuild {
        address: Address,
    }

    impl AddressBuild {
        pub fn line1(mut self, x: &str) -> Self {
            self.address.line1 = Some(x.into());
            self
        }
        pub fn line2(mut self, x: &str) -> Self {
            self.address.line2 = Some(x.into());
            self
        }
        pub fn city(mut self, x: &str) -> Self {
            self.address.city = Some(x.into());
            self
        }
        pub fn region(mut self, x: &str) -> Self {
            self.address.region = Some(x.into());
            self
        }
        pub fn postcode(mut self, x: &str) -> Self {
            self.address.postcode = Some(x.into());
            self
        }
        pub fn country(mut self, x: &str) -> Self {
            self.address.country = Some(x.into());
            self
        }
        pub fn finish(self) -> Address {
            self.address
        }
    }

    impl Builder for Address {
        type Build = AddressBuild;
        fn build() -> AddressBuild {
            AddressBuild {
                address: Address::default(),
            }
        }
    }
}
