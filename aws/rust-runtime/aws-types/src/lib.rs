/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Types shared by every AWS service crate: the target region and a testable view of
//! the process environment.

pub mod os_shim_internal;
pub mod region;

pub use region::Region;
