// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
mod mock_backend;
mod test_registration_api;
mod test_submit_scenarios;
