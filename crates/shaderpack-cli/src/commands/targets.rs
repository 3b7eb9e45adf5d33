// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::helpers::*;
use shaderpack_core::DEFAULT_TARGETS;

pub fn targets() {
    print_task_start("Backend Targets", PACKAGE, YELLOW);
    println!(
        "{}{:<8} {:<9} {:<8} {:<8}{}",
        BOLD, "name", "platform", "vertex", "fragment", RESET
    );
    for target in &DEFAULT_TARGETS {
        println!(
            "{:<8} {:<9} {:<8} {:<8}",
            target.name,
            target.platform.as_arg(),
            target.vertex_profile,
            target.fragment_profile
        );
    }
}
