/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use ec2::input::{CreateVolumeRequest, RunInstancesRequest};
use ec2::model::{
    Filter, FleetLaunchTemplateConfigRequest, FleetLaunchTemplateOverridesRequest, Instance,
    InstanceState, InstanceStateName, InstanceType, ResourceType, Tag, TagSpecification,
    VolumeType, VpnConnection, VpnTunnelOptionsSpecification,
};
use ec2::output::{DescribeInstancesResult, Volume};
use ec2::Instant;
use pretty_assertions::assert_eq;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn tag(key: &str, value: &str) -> Tag {
    Tag::builder().key(key).value(value).build()
}

#[test]
fn builder_sets_and_accessors_read_back() {
    let request = CreateVolumeRequest::builder()
        .availability_zone("us-east-1a")
        .size(100)
        .volume_type(VolumeType::Gp3)
        .encrypted(true)
        .tag_specifications(
            TagSpecification::builder()
                .resource_type(ResourceType::Volume)
                .tags(tag("team", "storage"))
                .build(),
        )
        .build();

    assert_eq!(request.availability_zone(), Some("us-east-1a"));
    assert_eq!(request.size(), Some(100));
    assert_eq!(request.volume_type(), Some(&VolumeType::Gp3));
    assert_eq!(request.encrypted(), Some(true));
    assert_eq!(request.iops(), None);
    assert_eq!(request.snapshot_id(), None);

    let specs = request.tag_specifications().unwrap();
    assert_eq!(specs.len(), 1);
    assert_eq!(specs[0].resource_type(), Some(&ResourceType::Volume));
    assert_eq!(specs[0].tags(), Some(&[tag("team", "storage")][..]));
}

#[test]
fn list_setters_append() {
    let filter = Filter::builder()
        .name("instance-state-name")
        .values("running")
        .values("stopped")
        .build();
    assert_eq!(
        filter.values(),
        Some(&["running".to_owned(), "stopped".to_owned()][..])
    );

    let filter = Filter::builder()
        .values("pending")
        .set_values(Some(vec!["terminated".to_owned()]))
        .build();
    assert_eq!(filter.values(), Some(&["terminated".to_owned()][..]));
}

#[test]
fn clearing_a_member_unsets_it() {
    let builder = CreateVolumeRequest::builder().size(8).iops(3000);
    assert_eq!(builder.get_size(), &Some(8));
    let request = builder.set_size(None).set_iops(None).build();
    assert_eq!(request.size(), None);
    assert_eq!(request.iops(), None);
    assert_eq!(request, CreateVolumeRequest::builder().build());
    assert_eq!(request, CreateVolumeRequest::default());
}

#[test]
fn equality_and_hashing_are_structural() {
    let first = tag("Name", "web");
    let second = first.clone();
    assert_eq!(first, second);
    assert_eq!(hash_of(&first), hash_of(&second));
    assert_ne!(first, Tag::builder().key("Name").build());

    let tags: HashSet<Tag> = vec![tag("a", "1"), tag("a", "1"), tag("b", "2")]
        .into_iter()
        .collect();
    assert_eq!(tags.len(), 2);

    let state = |name| InstanceState::builder().code(16).name(name).build();
    assert_eq!(
        state(InstanceStateName::Running),
        state(InstanceStateName::from("running"))
    );
    assert_ne!(
        state(InstanceStateName::Running),
        state(InstanceStateName::Stopped)
    );
}

#[test]
fn shapes_with_floats_hash_consistently() {
    let overrides = || {
        FleetLaunchTemplateOverridesRequest::builder()
            .instance_type(InstanceType::M5Large)
            .weighted_capacity(2.5)
            .priority(1.0)
            .build()
    };
    assert_eq!(overrides(), overrides());
    assert_eq!(hash_of(&overrides()), hash_of(&overrides()));

    let cheaper = FleetLaunchTemplateOverridesRequest::builder()
        .instance_type(InstanceType::M5Large)
        .weighted_capacity(2.5)
        .priority(2.0)
        .build();
    assert_ne!(overrides(), cheaper);

    // the float lives one level down here
    let config = || {
        FleetLaunchTemplateConfigRequest::builder()
            .overrides(overrides())
            .build()
    };
    assert_eq!(hash_of(&config()), hash_of(&config()));
}

#[test]
fn floats_compare_by_bit_pattern() {
    let weighted = |capacity: f64| {
        FleetLaunchTemplateOverridesRequest::builder()
            .weighted_capacity(capacity)
            .build()
    };

    let nan = weighted(f64::NAN);
    assert_eq!(nan, nan.clone());
    assert_eq!(hash_of(&nan), hash_of(&nan.clone()));

    let nested = FleetLaunchTemplateConfigRequest::builder()
        .overrides(nan.clone())
        .build();
    assert_eq!(nested, nested.clone());
    let set: HashSet<_> = vec![nested.clone(), nested].into_iter().collect();
    assert_eq!(set.len(), 1);

    // equality and hashing agree on signed zero
    let (zero, negative_zero) = (weighted(0.0), weighted(-0.0));
    assert_ne!(zero, negative_zero);
    assert_ne!(hash_of(&zero), hash_of(&negative_zero));
    assert_eq!(zero, weighted(0.0));
}

#[test]
fn display_skips_unset_members() {
    let spec = TagSpecification::builder()
        .resource_type(ResourceType::Volume)
        .tags(tag("Name", "data"))
        .tags(tag("env", "prod"))
        .build();
    assert_eq!(
        spec.to_string(),
        "{ResourceType: volume,Tags: [{Key: Name,Value: data}, {Key: env,Value: prod}]}"
    );
    assert_eq!(Tag::builder().build().to_string(), "{}");

    let overrides = FleetLaunchTemplateOverridesRequest::builder()
        .weighted_capacity(1.0)
        .priority(0.5)
        .build();
    assert_eq!(
        overrides.to_string(),
        "{WeightedCapacity: 1.0,Priority: 0.5}"
    );

    let request = CreateVolumeRequest::builder()
        .availability_zone("us-east-1a")
        .size(100)
        .volume_type(VolumeType::Gp2)
        .build();
    assert_eq!(
        request.to_string(),
        "{AvailabilityZone: us-east-1a,Size: 100,VolumeType: gp2}"
    );

    let instance = Instance::builder()
        .instance_id("i-0abc")
        .launch_time(Instant::from_epoch_seconds(1576540098))
        .build();
    assert_eq!(
        instance.to_string(),
        "{InstanceId: i-0abc,LaunchTime: 2019-12-16T23:48:18Z}"
    );
}

#[test]
fn sensitive_members_are_redacted() {
    let request = RunInstancesRequest::builder()
        .image_id("ami-0123")
        .user_data("IyEvYmluL2Jhc2ggLWV4")
        .build();
    assert_eq!(
        request.to_string(),
        "{ImageId: ami-0123,UserData: *** Sensitive Data Redacted ***}"
    );
    let debug = format!("{:?}", request);
    assert!(debug.contains("user_data: \"*** Sensitive Data Redacted ***\""));
    assert!(!debug.contains("IyEvYmluL2Jhc2ggLWV4"));

    let builder = RunInstancesRequest::builder().user_data("IyEvYmluL2Jhc2ggLWV4");
    assert!(!format!("{:?}", builder).contains("IyEvYmluL2Jhc2ggLWV4"));

    let tunnel = VpnTunnelOptionsSpecification::builder()
        .tunnel_inside_cidr("169.254.10.0/30")
        .pre_shared_key("s3cr3t_key")
        .build();
    let debug = format!("{:?}", tunnel);
    assert!(debug.contains("tunnel_inside_cidr: Some(\"169.254.10.0/30\")"));
    assert!(!debug.contains("s3cr3t_key"));
    assert!(!tunnel.to_string().contains("s3cr3t_key"));
    // the accessor still hands the value back
    assert_eq!(tunnel.pre_shared_key(), Some("s3cr3t_key"));

    let connection = VpnConnection::builder()
        .customer_gateway_configuration("<vpn_connection/>")
        .build();
    assert!(!format!("{:?}", connection).contains("vpn_connection/"));
}

#[test]
fn enums_round_trip_unknown_values() {
    assert_eq!(InstanceType::from("t3.micro"), InstanceType::T3Micro);
    assert_eq!("m5.large".parse::<InstanceType>().unwrap(), InstanceType::M5Large);
    assert_eq!(InstanceType::from("u-6tb1.metal").as_str(), "u-6tb1.metal");

    let future = InstanceType::from("z9.enormous");
    assert_eq!(future, InstanceType::Unknown("z9.enormous".to_owned()));
    assert_eq!(future.as_str(), "z9.enormous");
    assert_eq!(future.to_string(), "z9.enormous");

    assert_eq!(ResourceType::VpnConnection.to_string(), "vpn-connection");
    assert_eq!(
        VolumeType::values(),
        &["standard", "io1", "io2", "gp2", "sc1", "st1", "gp3"]
    );
    for value in InstanceType::values() {
        assert!(!matches!(InstanceType::from(*value), InstanceType::Unknown(_)));
    }
}

#[test]
fn outputs_nest_model_shapes() {
    let result = DescribeInstancesResult::builder()
        .reservations(
            ec2::model::Reservation::builder()
                .reservation_id("r-1")
                .instances(Instance::builder().instance_id("i-1").build())
                .build(),
        )
        .next_token("token")
        .build();
    let reservation = &result.reservations().unwrap()[0];
    assert_eq!(reservation.instances().unwrap()[0].instance_id(), Some("i-1"));
    assert_eq!(result.next_token(), Some("token"));

    let volume = Volume::builder()
        .volume_id("vol-1")
        .size(20)
        .create_time(Instant::from_epoch_seconds(0))
        .build();
    assert_eq!(
        volume.to_string(),
        "{CreateTime: 1970-01-01T00:00:00Z,Size: 20,VolumeId: vol-1}"
    );
}
